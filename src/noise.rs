//! Stochastic Pauli fault injection.
//!
//! Models a noisy execution environment by interleaving randomly chosen
//! Pauli gates into an existing circuit description. The randomness
//! source is caller-supplied so runs are reproducible under a fixed
//! seed.

use crate::ir::{Circuit, GateType, Operation};
use log::debug;
use rand::Rng;

const PAULIS: [GateType; 3] = [GateType::X, GateType::Y, GateType::Z];

fn random_pauli<R: Rng>(rng: &mut R) -> GateType {
    PAULIS[rng.gen_range(0..PAULIS.len())]
}

/// Returns a copy of `circuit` with simulated Pauli noise interleaved.
///
/// Every operation of the input is carried over unchanged, in order.
/// After each single-qubit operation, with probability `alpha`, one
/// uniformly chosen Pauli gate is inserted on the same qubit. After
/// each two-qubit operation, with probability `beta`, one Pauli kind is
/// chosen and inserted on **both** operands -- the same kind on each,
/// not redrawn per qubit.
///
/// `alpha` and `beta` are probabilities in `[0, 1]`; values outside the
/// interval degenerate to never/always inserting. Exactly one threshold
/// draw is made per eligible operation, followed by one kind draw when
/// the threshold passes, so output is byte-identical across runs with
/// identically seeded generators.
pub fn apply_pauli_noise<R: Rng>(circuit: &Circuit, alpha: f64, beta: f64, rng: &mut R) -> Circuit {
    let mut noisy = Circuit::new(circuit.num_qubits());

    for op in circuit {
        noisy.push_unchecked(op.clone());

        match op.qubits() {
            [qubit] => {
                if rng.gen::<f64>() < alpha {
                    let pauli = random_pauli(rng);
                    noisy.push_unchecked(pauli_op(pauli, *qubit));
                    debug!("injected {} on qubit {} after 1-qubit gate", pauli, qubit);
                }
            }
            [first, second] => {
                if rng.gen::<f64>() < beta {
                    let pauli = random_pauli(rng);
                    noisy.push_unchecked(pauli_op(pauli, *first));
                    noisy.push_unchecked(pauli_op(pauli, *second));
                    debug!(
                        "injected {} on qubits {} and {} after 2-qubit gate",
                        pauli, first, second
                    );
                }
            }
            _ => {}
        }
    }

    noisy
}

fn pauli_op(pauli: GateType, qubit: usize) -> Operation {
    // Paulis take one qubit and no parameters, so this cannot fail.
    Operation::new(pauli, vec![qubit], vec![]).unwrap_or_else(|_| unreachable!())
}
