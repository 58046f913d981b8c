use super::gates::GateType;
use super::operations::Operation;
use crate::error::StructuralError;
use serde::{Deserialize, Serialize};

/// Intermediate Representation of a Quantum Circuit.
///
/// A `Circuit` is an ordered, append-only sequence of [`Operation`]s
/// over a fixed zero-based qubit index space. `num_qubits` is set at
/// creation and never changes; every appended operation is checked
/// against it, so a circuit obtained from this API only ever holds
/// structurally valid operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<Operation>,
}

impl Circuit {
    /// Creates a new empty circuit over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Number of qubits the circuit is declared over.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Operations in insertion (execution) order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of operations in the circuit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Iterates over operations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Appends an operation, checking every qubit index against the
    /// circuit's index space.
    pub fn push(&mut self, op: Operation) -> Result<(), StructuralError> {
        for &qubit in op.qubits() {
            if qubit >= self.num_qubits {
                return Err(StructuralError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.operations.push(op);
        Ok(())
    }

    /// Appends an operation whose qubit indices are already known to be
    /// in range (e.g. copied from another circuit of the same width).
    pub(crate) fn push_unchecked(&mut self, op: Operation) {
        debug_assert!(op.qubits().iter().all(|&q| q < self.num_qubits));
        self.operations.push(op);
    }

    fn append(
        &mut self,
        gate: GateType,
        qubits: Vec<usize>,
        params: Vec<f64>,
    ) -> Result<(), StructuralError> {
        self.push(Operation::new(gate, qubits, params)?)
    }

    /// Appends a Hadamard gate on `qubit`.
    pub fn h(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::H, vec![qubit], vec![])
    }

    /// Appends a Pauli-X gate on `qubit`.
    pub fn x(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::X, vec![qubit], vec![])
    }

    /// Appends a Pauli-Y gate on `qubit`.
    pub fn y(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::Y, vec![qubit], vec![])
    }

    /// Appends a Pauli-Z gate on `qubit`.
    pub fn z(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::Z, vec![qubit], vec![])
    }

    /// Appends a sqrt-X gate on `qubit`.
    pub fn sx(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::SX, vec![qubit], vec![])
    }

    /// Appends an identity gate on `qubit`.
    pub fn id(&mut self, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::ID, vec![qubit], vec![])
    }

    /// Appends a Z-rotation by `angle` radians on `qubit`.
    pub fn rz(&mut self, angle: f64, qubit: usize) -> Result<(), StructuralError> {
        self.append(GateType::RZ, vec![qubit], vec![angle])
    }

    /// Appends a controlled-NOT gate.
    pub fn cx(&mut self, control: usize, target: usize) -> Result<(), StructuralError> {
        self.append(GateType::CX, vec![control, target], vec![])
    }

    /// Appends a controlled-phase gate with phase `angle` radians.
    pub fn cp(&mut self, angle: f64, control: usize, target: usize) -> Result<(), StructuralError> {
        self.append(GateType::CP, vec![control, target], vec![angle])
    }

    /// Appends a swap of two qubits.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), StructuralError> {
        self.append(GateType::SWAP, vec![a, b], vec![])
    }

    /// Appends a general single-qubit unitary `U3(theta, phi, lambda)`.
    pub fn u3(
        &mut self,
        theta: f64,
        phi: f64,
        lambda: f64,
        qubit: usize,
    ) -> Result<(), StructuralError> {
        self.append(GateType::U3, vec![qubit], vec![theta, phi, lambda])
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
