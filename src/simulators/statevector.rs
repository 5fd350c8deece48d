//! Statevector simulator
//!
//! Owns a [`StateVector`] and runs circuits forward or backward against it.

use ndarray::Array1;
use num_complex::Complex64;
use tracing::debug;

use super::config::SimulatorConfig;
use crate::error::RegisterError;
use crate::quantum::{Circuit, Computer, Gate, StateVector};

/// A statevector simulator for quantum circuits
#[derive(Clone, Debug)]
pub struct StatevectorSimulator {
    /// The current state of the simulator
    state: StateVector,
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Create a new statevector simulator with the specified number of qubits
    pub fn new(qubit_count: usize) -> Result<Self, RegisterError> {
        Self::with_config(SimulatorConfig::new(qubit_count))
    }

    /// Create a simulator in |0...0⟩ from a configuration.
    ///
    /// Fails with [`RegisterError::TooManyQubits`] when the configured qubit
    /// count is too wide for a dense state vector.
    pub fn with_config(config: SimulatorConfig) -> Result<Self, RegisterError> {
        Ok(StatevectorSimulator {
            state: StateVector::zero_state(config.qubit_count)?,
            config,
        })
    }

    /// Create a simulator from an existing state vector
    pub fn from_state(state: StateVector) -> Self {
        StatevectorSimulator {
            config: SimulatorConfig::new(state.qubit_count()),
            state,
        }
    }

    /// Get the current state vector
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Replace the state vector; it must match the configured qubit count
    pub fn set_state(&mut self, state: StateVector) -> Result<(), RegisterError> {
        if state.qubit_count() != self.qubit_count() {
            return Err(RegisterError::DimensionMismatch {
                expected: self.state.dimension(),
                actual: state.dimension(),
            });
        }
        self.state = state;
        Ok(())
    }

    /// Load raw amplitudes, checked against the configured tolerance
    pub fn load_amplitudes(&mut self, amplitudes: Vec<Complex64>) -> Result<(), RegisterError> {
        let state = StateVector::with_tolerance(
            self.qubit_count(),
            Array1::from(amplitudes),
            self.config.tolerance,
        )?;
        self.state = state;
        Ok(())
    }

    /// Reset the simulator to the |0...0⟩ state
    pub fn reset(&mut self) {
        self.state.set_zero();
    }

    /// Get the number of qubits in the simulator
    pub fn qubit_count(&self) -> usize {
        self.config.qubit_count
    }

    /// Apply a single gate
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<(), RegisterError> {
        debug!(register = %self.label(), %gate, "apply gate");
        gate.apply(&mut self.state)
    }

    /// Run a circuit forward.
    ///
    /// The circuit is checked against the register size first, so a circuit
    /// that does not fit leaves the state untouched.
    pub fn run_circuit(&mut self, circuit: &Circuit) -> Result<(), RegisterError> {
        self.check_fits(circuit)?;
        debug!(register = %self.label(), gates = circuit.len(), "run circuit");
        circuit.apply(&mut self.state)
    }

    /// Run a circuit's inverse, undoing a previous [`run_circuit`](Self::run_circuit)
    pub fn undo_circuit(&mut self, circuit: &Circuit) -> Result<(), RegisterError> {
        self.check_fits(circuit)?;
        debug!(register = %self.label(), gates = circuit.len(), "undo circuit");
        circuit.invert(&mut self.state)
    }

    /// Run several circuits back to back.
    ///
    /// Every circuit is checked against the register size before the first
    /// one runs, so an oversized circuit anywhere in the sequence leaves the
    /// state untouched.
    pub fn run_circuit_sequence(&mut self, circuits: &[Circuit]) -> Result<(), RegisterError> {
        for circuit in circuits {
            self.check_fits(circuit)?;
        }
        for circuit in circuits {
            self.run_circuit(circuit)?;
        }
        Ok(())
    }

    /// Whether the current state equals `other` up to global phase, within
    /// the configured tolerance
    pub fn matches(&self, other: &StateVector) -> bool {
        self.state.approx_eq_up_to_phase(other, self.config.tolerance)
    }

    fn check_fits(&self, circuit: &Circuit) -> Result<(), RegisterError> {
        let span = circuit.qubit_span();
        if span > self.qubit_count() {
            return Err(RegisterError::out_of_range(span - 1, self.qubit_count()));
        }
        Ok(())
    }
}

impl Computer for StatevectorSimulator {
    type Error = RegisterError;

    fn unitary(
        &mut self,
        bit: usize,
        m00: Complex64,
        m01: Complex64,
        m10: Complex64,
        m11: Complex64,
    ) -> Result<(), RegisterError> {
        self.state.unitary(bit, m00, m01, m10, m11)
    }

    fn cnot(&mut self, control: usize, target: usize) -> Result<(), RegisterError> {
        self.state.cnot(control, target)
    }

    fn label(&self) -> String {
        match &self.config.label {
            Some(label) => label.clone(),
            None => self.state.label(),
        }
    }

    fn x(&mut self, bit: usize) -> Result<(), RegisterError> {
        self.state.x(bit)
    }

    fn z(&mut self, bit: usize) -> Result<(), RegisterError> {
        self.state.z(bit)
    }
}
