use super::gates::GateType;
use crate::error::StructuralError;
use serde::{Deserialize, Serialize};

/// A single gate application in a circuit.
///
/// An operation is immutable once built: [`Operation::new`] is the only
/// way to obtain one, and it rejects operand lists and parameter lists
/// whose lengths do not match the gate's declared arity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    gate: GateType,
    qubits: Vec<usize>,
    params: Vec<f64>,
}

impl Operation {
    /// Builds a validated operation.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError`] when `qubits` or `params` does not
    /// match the arity of `gate`, or when a two-qubit gate names the
    /// same qubit twice.
    pub fn new(
        gate: GateType,
        qubits: Vec<usize>,
        params: Vec<f64>,
    ) -> Result<Self, StructuralError> {
        if qubits.len() != gate.arity() {
            return Err(StructuralError::ArityMismatch {
                gate,
                expected: gate.arity(),
                actual: qubits.len(),
            });
        }
        if params.len() != gate.param_count() {
            return Err(StructuralError::ParamCountMismatch {
                gate,
                expected: gate.param_count(),
                actual: params.len(),
            });
        }
        if qubits.len() == 2 && qubits[0] == qubits[1] {
            return Err(StructuralError::DuplicateQubit {
                gate,
                qubit: qubits[0],
            });
        }
        Ok(Self {
            gate,
            qubits,
            params,
        })
    }

    /// Type of the gate applied.
    pub fn gate(&self) -> GateType {
        self.gate
    }

    /// Indices of the qubits involved, in gate-argument order.
    pub fn qubits(&self) -> &[usize] {
        &self.qubits
    }

    /// Real-valued gate parameters (angles in radians).
    pub fn params(&self) -> &[f64] {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_operation() {
        let op = Operation::new(GateType::RZ, vec![3], vec![1.57]).unwrap();
        assert_eq!(op.gate(), GateType::RZ);
        assert_eq!(op.qubits(), &[3]);
        assert_eq!(op.params(), &[1.57]);
    }

    #[test]
    fn test_arity_mismatch() {
        let err = Operation::new(GateType::CX, vec![0], vec![]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::ArityMismatch {
                gate: GateType::CX,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_param_count_mismatch() {
        let err = Operation::new(GateType::U3, vec![0], vec![0.1, 0.2]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::ParamCountMismatch {
                gate: GateType::U3,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_duplicate_qubit() {
        let err = Operation::new(GateType::CX, vec![1, 1], vec![]).unwrap_err();
        assert_eq!(
            err,
            StructuralError::DuplicateQubit {
                gate: GateType::CX,
                qubit: 1
            }
        );
    }
}
