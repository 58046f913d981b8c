use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantum Gate Types
///
/// This enum is the closed vocabulary of gates the crate works with:
/// the Pauli gates (X, Y, Z), the Hadamard and sqrt-X gates (H, SX),
/// the identity, a parameterized Z-rotation (RZ), the two-qubit CX, CP
/// and SWAP gates, and the general single-qubit unitary U3.
///
/// A `GateType` carries no parameters itself; angles live in the
/// [`Operation`](crate::ir::Operation) that applies the gate. Arity and
/// parameter count are fixed per variant and enforced at operation
/// construction.
///
/// # Examples
///
/// ```
/// use q_forge::ir::GateType;
/// assert_eq!(GateType::CX.arity(), 2);
/// assert_eq!(GateType::U3.param_count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateType {
    /// Hadamard gate
    H,
    /// Pauli-X gate (NOT)
    X,
    /// Pauli-Y gate
    Y,
    /// Pauli-Z gate
    Z,
    /// Sqrt-X gate
    SX,
    /// Identity gate (wait)
    ID,
    /// Rotation around Z-axis, one angle parameter
    RZ,
    /// Controlled-NOT gate (control, target)
    CX,
    /// Controlled-phase gate (control, target), one angle parameter
    CP,
    /// Swap gate (symmetric operands)
    SWAP,
    /// General unitary U3(theta, phi, lambda)
    U3,
}

impl GateType {
    /// Number of qubits the gate acts on.
    pub fn arity(&self) -> usize {
        match self {
            GateType::CX | GateType::CP | GateType::SWAP => 2,
            _ => 1,
        }
    }

    /// Number of real-valued parameters the gate expects.
    pub fn param_count(&self) -> usize {
        match self {
            GateType::RZ | GateType::CP => 1,
            GateType::U3 => 3,
            _ => 0,
        }
    }

    /// Whether the gate belongs to the lowering target basis
    /// `{cx, id, rz, sx, x}`.
    pub fn is_basis(&self) -> bool {
        matches!(
            self,
            GateType::CX | GateType::ID | GateType::RZ | GateType::SX | GateType::X
        )
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateType::H => "h",
            GateType::X => "x",
            GateType::Y => "y",
            GateType::Z => "z",
            GateType::SX => "sx",
            GateType::ID => "id",
            GateType::RZ => "rz",
            GateType::CX => "cx",
            GateType::CP => "cp",
            GateType::SWAP => "swap",
            GateType::U3 => "u3",
        };
        write!(f, "{}", name)
    }
}
