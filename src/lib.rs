//! q-forge: quantum circuit synthesis, noise injection, and basis
//! transpilation.
//!
//! The crate builds and rewrites *descriptions* of gate sequences; it
//! never executes them. Three transformations share one intermediate
//! representation ([`ir::Circuit`]) and compose left to right:
//!
//! 1. [`synth::draper_adder`] synthesizes a QFT-based integer adder,
//! 2. [`noise::apply_pauli_noise`] interleaves randomized Pauli faults,
//! 3. [`transpiler::lower_to_basis`] rewrites the result into the
//!    `{cx, id, rz, sx, x}` gate basis.
//!
//! Each stage takes its input by reference and returns (or appends to)
//! an independently owned circuit, so stages never share mutable state.

pub mod error;
pub mod ir;
pub mod noise;
pub mod synth;
pub mod transpiler;

pub use error::{LoweringError, StructuralError, SynthesisError};
pub use ir::{Circuit, GateType, Operation};
pub use noise::apply_pauli_noise;
pub use synth::{draper_adder, qft, qft_inverse};
pub use transpiler::lower_to_basis;
