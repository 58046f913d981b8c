//! Arithmetic synthesis: the quantum Fourier transform and the Draper
//! adder built on top of it.
//!
//! Registers are plain slices of qubit indices, least-significant bit
//! first. The synthesizer only appends gate descriptions to a
//! [`Circuit`]; it never evaluates them.

use crate::error::{StructuralError, SynthesisError};
use crate::ir::Circuit;
use log::debug;
use std::collections::HashSet;
use std::f64::consts::PI;

/// Appends the quantum Fourier transform over `qubits` to `circuit`.
///
/// For each position `i` a Hadamard is applied, followed by
/// controlled-phase gates of angle `pi / 2^(j-i)` from every later
/// position `j`; the register order is then reversed with swaps. The
/// phase ladder runs before the swaps -- reordering the two stages
/// changes the bit convention of the transform.
pub fn qft(circuit: &mut Circuit, qubits: &[usize]) -> Result<(), StructuralError> {
    let n = qubits.len();
    for i in 0..n {
        circuit.h(qubits[i])?;
        debug!("qft: h on qubit {}", qubits[i]);
        for j in (i + 1)..n {
            let angle = PI / 2f64.powi((j - i) as i32);
            circuit.cp(angle, qubits[j], qubits[i])?;
            debug!(
                "qft: cp({:.6}) control {} target {}",
                angle, qubits[j], qubits[i]
            );
        }
    }
    for i in 0..n / 2 {
        circuit.swap(qubits[i], qubits[n - 1 - i])?;
        debug!("qft: swap qubits {} and {}", qubits[i], qubits[n - 1 - i]);
    }
    Ok(())
}

/// Appends the exact inverse of [`qft`] over the same `qubits`: the
/// same operand pairs in reversed step order, phase angles negated.
pub fn qft_inverse(circuit: &mut Circuit, qubits: &[usize]) -> Result<(), StructuralError> {
    let n = qubits.len();
    for i in (0..n / 2).rev() {
        circuit.swap(qubits[i], qubits[n - 1 - i])?;
    }
    for i in (0..n).rev() {
        for j in ((i + 1)..n).rev() {
            let angle = -PI / 2f64.powi((j - i) as i32);
            circuit.cp(angle, qubits[j], qubits[i])?;
        }
        circuit.h(qubits[i])?;
    }
    Ok(())
}

/// Appends a Draper adder computing `a + b` into the `a` register.
///
/// `a_qubits` and `b_qubits` list the binary digits of the two
/// operands, least-significant first, as disjoint qubit indices of
/// `circuit`. The `a` register is Fourier-transformed, the digits of
/// `b` are accumulated into its phases with place-value-weighted
/// controlled rotations, and the inverse transform returns the
/// register to the computational basis holding the sum.
///
/// The sum is taken modulo `2^a_qubits.len()`: no carry qubit is
/// allocated, so a caller expecting the true sum must size `a_qubits`
/// one bit wider than its operand.
///
/// # Errors
///
/// Fails with [`SynthesisError::OverlappingRegisters`] when the two
/// registers share a qubit index, or a [`StructuralError`] when an
/// index is out of range for `circuit`.
pub fn draper_adder(
    circuit: &mut Circuit,
    a_qubits: &[usize],
    b_qubits: &[usize],
) -> Result<(), SynthesisError> {
    let a_set: HashSet<usize> = a_qubits.iter().copied().collect();
    if let Some(&qubit) = b_qubits.iter().find(|q| a_set.contains(q)) {
        return Err(SynthesisError::OverlappingRegisters { qubit });
    }

    let n = a_qubits.len();
    // The transform is run over the register viewed most-significant
    // bit first, so that a_qubits[i] ends up carrying the 2^i/2^n
    // frequency component.
    let msb_first: Vec<usize> = a_qubits.iter().rev().copied().collect();

    qft(circuit, &msb_first)?;

    for (i, &aq) in a_qubits.iter().enumerate() {
        for (j, &bq) in b_qubits.iter().enumerate() {
            if i + j < n {
                let angle = PI / 2f64.powi((n - 1 - i - j) as i32);
                circuit.cp(angle, bq, aq)?;
                debug!(
                    "adder: cp({:.6}) from b[{}] (qubit {}) to a[{}] (qubit {})",
                    angle, j, bq, i, aq
                );
            }
        }
    }

    qft_inverse(circuit, &msb_first)?;
    Ok(())
}
