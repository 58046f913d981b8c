use crate::ir::GateType;
use thiserror::Error;

/// Structural faults in an operation or circuit, raised eagerly at
/// construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// Operand count does not match the gate's arity.
    #[error("gate '{gate}' expects {expected} qubit(s), got {actual}")]
    ArityMismatch {
        gate: GateType,
        expected: usize,
        actual: usize,
    },
    /// Parameter count does not match the gate's declared parameters.
    #[error("gate '{gate}' expects {expected} parameter(s), got {actual}")]
    ParamCountMismatch {
        gate: GateType,
        expected: usize,
        actual: usize,
    },
    /// A qubit index lies outside the circuit's index space.
    #[error("qubit index {qubit} out of range for a circuit with {num_qubits} qubit(s)")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },
    /// A two-qubit gate addresses the same qubit twice.
    #[error("gate '{gate}' addresses qubit {qubit} twice")]
    DuplicateQubit { gate: GateType, qubit: usize },
}

/// Caller-contract violations detected by the arithmetic synthesizer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// The `a` and `b` registers share a qubit index.
    #[error("adder registers overlap at qubit {qubit}")]
    OverlappingRegisters { qubit: usize },
    #[error(transparent)]
    Structural(#[from] StructuralError),
}

/// Failure of the basis lowering pass.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoweringError {
    /// A non-basis gate with no rewrite rule was encountered.
    #[error("no rewrite rule for gate '{gate}' at position {position}")]
    UnsupportedGate { gate: GateType, position: usize },
}
