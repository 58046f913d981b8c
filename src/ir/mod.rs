//! Intermediate representation: gate vocabulary, validated operations,
//! and append-only circuits.

pub mod circuit;
pub mod gates;
pub mod operations;

pub use circuit::Circuit;
pub use gates::GateType;
pub use operations::Operation;
