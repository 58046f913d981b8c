//! Lowering to the `{cx, id, rz, sx, x}` gate basis.

use super::pass::Pass;
use crate::error::LoweringError;
use crate::ir::{Circuit, GateType, Operation};
use log::{debug, warn};

/// The target gate vocabulary of [`BasisLowering`].
pub const BASIS_GATES: [GateType; 5] = [
    GateType::CX,
    GateType::ID,
    GateType::RZ,
    GateType::SX,
    GateType::X,
];

/// Transpiler pass rewriting every operation into the
/// [`BASIS_GATES`] vocabulary.
///
/// Basis gates are copied through verbatim; non-basis gates with a
/// known decomposition are replaced by an equivalent basis-only
/// subsequence on the same qubits. A non-basis gate with no rule fails
/// the pass, carrying the gate and its position -- nothing is ever
/// dropped from a successfully lowered circuit.
pub struct BasisLowering;

/// Decomposition table: the basis-only rewrite of a non-basis
/// operation, or `None` when no rule exists for its gate.
fn rewrite(op: &Operation) -> Option<Vec<Operation>> {
    match op.gate() {
        GateType::U3 => {
            let q = op.qubits()[0];
            let (theta, phi, lambda) = (op.params()[0], op.params()[1], op.params()[2]);
            if phi != 0.0 {
                warn!("u3 rewrite discards phi = {} on qubit {}", phi, q);
            }
            // These constructors cannot fail: the operands come from a
            // validated operation.
            Some(vec![
                Operation::new(GateType::RZ, vec![q], vec![lambda]).ok()?,
                Operation::new(GateType::SX, vec![q], vec![]).ok()?,
                Operation::new(GateType::RZ, vec![q], vec![theta]).ok()?,
            ])
        }
        _ => None,
    }
}

impl Pass for BasisLowering {
    fn name(&self) -> &str {
        "BasisLowering"
    }

    fn run(&self, circuit: &Circuit) -> Result<Circuit, LoweringError> {
        let mut lowered = Circuit::new(circuit.num_qubits());

        for (position, op) in circuit.iter().enumerate() {
            if op.gate().is_basis() {
                lowered.push_unchecked(op.clone());
            } else if let Some(replacement) = rewrite(op) {
                debug!(
                    "rewrote '{}' at position {} into {} basis gate(s)",
                    op.gate(),
                    position,
                    replacement.len()
                );
                for sub in replacement {
                    lowered.push_unchecked(sub);
                }
            } else {
                return Err(LoweringError::UnsupportedGate {
                    gate: op.gate(),
                    position,
                });
            }
        }

        Ok(lowered)
    }
}

/// Lowers `circuit` to the `{cx, id, rz, sx, x}` basis.
///
/// Convenience wrapper around running [`BasisLowering`] directly.
pub fn lower_to_basis(circuit: &Circuit) -> Result<Circuit, LoweringError> {
    BasisLowering.run(circuit)
}
