//! Test-only statevector evaluator.
//!
//! The library itself never executes circuits; the adder tests need
//! semantic verification, so this module evaluates a circuit on a
//! computational basis state and reads register values back out.

use num_complex::Complex64;
use q_forge::{Circuit, GateType};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const IM: Complex64 = Complex64::new(0.0, 1.0);

fn apply_single(state: &mut [Complex64], qubit: usize, m: [[Complex64; 2]; 2]) {
    let bit = 1usize << qubit;
    for idx in 0..state.len() {
        if idx & bit == 0 {
            let a = state[idx];
            let b = state[idx | bit];
            state[idx] = m[0][0] * a + m[0][1] * b;
            state[idx | bit] = m[1][0] * a + m[1][1] * b;
        }
    }
}

/// Evaluates `circuit` on the basis state `|initial>` and returns the
/// final statevector (little-endian basis indexing: bit `q` of the
/// index is qubit `q`).
pub fn evaluate(circuit: &Circuit, initial: usize) -> Vec<Complex64> {
    let dim = 1usize << circuit.num_qubits();
    assert!(initial < dim, "initial state out of range");
    let mut state = vec![ZERO; dim];
    state[initial] = ONE;

    for op in circuit {
        let qs = op.qubits();
        match op.gate() {
            GateType::ID => {}
            GateType::X => {
                apply_single(&mut state, qs[0], [[ZERO, ONE], [ONE, ZERO]]);
            }
            GateType::Y => {
                apply_single(
                    &mut state,
                    qs[0],
                    [[ZERO, -IM], [IM, ZERO]],
                );
            }
            GateType::Z => {
                apply_single(&mut state, qs[0], [[ONE, ZERO], [ZERO, -ONE]]);
            }
            GateType::H => {
                let s = ONE / 2f64.sqrt();
                apply_single(&mut state, qs[0], [[s, s], [s, -s]]);
            }
            GateType::SX => {
                let p = Complex64::new(0.5, 0.5);
                let m = Complex64::new(0.5, -0.5);
                apply_single(&mut state, qs[0], [[p, m], [m, p]]);
            }
            GateType::RZ => {
                let half = op.params()[0] / 2.0;
                apply_single(
                    &mut state,
                    qs[0],
                    [
                        [(-IM * half).exp(), ZERO],
                        [ZERO, (IM * half).exp()],
                    ],
                );
            }
            GateType::CX => {
                let (c, t) = (1usize << qs[0], 1usize << qs[1]);
                for idx in 0..state.len() {
                    if idx & c != 0 && idx & t == 0 {
                        state.swap(idx, idx | t);
                    }
                }
            }
            GateType::CP => {
                let phase = (IM * op.params()[0]).exp();
                let (c, t) = (1usize << qs[0], 1usize << qs[1]);
                for (idx, amp) in state.iter_mut().enumerate() {
                    if idx & c != 0 && idx & t != 0 {
                        *amp *= phase;
                    }
                }
            }
            GateType::SWAP => {
                let (a, b) = (1usize << qs[0], 1usize << qs[1]);
                for idx in 0..state.len() {
                    if idx & a != 0 && idx & b == 0 {
                        state.swap(idx, idx ^ a ^ b);
                    }
                }
            }
            GateType::U3 => panic!("evaluator does not model u3; lower it first"),
        }
    }

    state
}

/// Basis index with the largest probability, plus that probability.
pub fn dominant_basis_state(state: &[Complex64]) -> (usize, f64) {
    let mut best = (0, 0.0);
    for (idx, amp) in state.iter().enumerate() {
        let p = amp.norm_sqr();
        if p > best.1 {
            best = (idx, p);
        }
    }
    best
}

/// Value held by a least-significant-first register within a basis
/// index.
pub fn register_value(index: usize, qubits: &[usize]) -> usize {
    qubits
        .iter()
        .enumerate()
        .map(|(i, &q)| ((index >> q) & 1) << i)
        .sum()
}

/// Basis index encoding `value` into a least-significant-first
/// register, all other qubits zero.
pub fn encode_register(value: usize, qubits: &[usize]) -> usize {
    qubits
        .iter()
        .enumerate()
        .map(|(i, &q)| ((value >> i) & 1) << q)
        .sum()
}
