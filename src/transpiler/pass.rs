use crate::error::LoweringError;
use crate::ir::Circuit;

/// A trait for transpiler passes.
///
/// A pass takes a circuit and returns a transformed circuit, or fails
/// with a diagnostic naming what it could not transform. Passes never
/// mutate their input.
pub trait Pass {
    /// Returns the name of the pass.
    fn name(&self) -> &str;

    /// Runs the pass on the given circuit.
    fn run(&self, circuit: &Circuit) -> Result<Circuit, LoweringError>;
}

/// Manages a sequence of transpiler passes.
#[derive(Default)]
pub struct PassManager {
    passes: Vec<Box<dyn Pass>>,
}

impl PassManager {
    /// Creates a new empty PassManager.
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Adds a pass to the manager.
    pub fn add_pass(&mut self, pass: Box<dyn Pass>) {
        self.passes.push(pass);
    }

    /// Runs all passes in sequence on the given circuit, stopping at
    /// the first failure.
    pub fn run(&self, circuit: &Circuit) -> Result<Circuit, LoweringError> {
        let mut current_circuit = circuit.clone();
        for pass in &self.passes {
            current_circuit = pass.run(&current_circuit)?;
        }
        Ok(current_circuit)
    }
}
