//! Error types for the reference register

use thiserror::Error;

/// Errors raised by [`StateVector`](crate::quantum::StateVector) when a gate
/// asks for something the register cannot do.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegisterError {
    /// Qubit index beyond the register
    #[error("Qubit index {qubit} out of range for {qubit_count}-qubit register")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    /// Controlled-NOT whose control and target coincide
    #[error("Controlled-NOT control and target are both qubit {0}")]
    ControlIsTarget(usize),

    /// Computational basis index beyond the state dimension
    #[error("Index {index} is out of range for a {dimension}-dimensional state")]
    BasisIndexOutOfRange { index: usize, dimension: usize },

    /// Amplitude vector of the wrong length
    #[error("State vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Amplitudes whose squared norm is not 1
    #[error("State vector is not normalized (norm² = {0})")]
    NotNormalized(f64),

    /// Register too wide to hold a dense amplitude vector
    #[error("Cannot allocate {qubit_count} qubits (at most {max} supported)")]
    TooManyQubits { qubit_count: usize, max: usize },
}

impl RegisterError {
    /// Create a qubit-out-of-range error
    pub fn out_of_range(qubit: usize, qubit_count: usize) -> Self {
        Self::QubitOutOfRange { qubit, qubit_count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let msg = RegisterError::out_of_range(5, 3).to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_control_is_target_message() {
        let msg = RegisterError::ControlIsTarget(2).to_string();
        assert!(msg.contains("qubit 2"));
    }

    #[test]
    fn test_too_many_qubits_message() {
        let msg = RegisterError::TooManyQubits { qubit_count: 64, max: 30 }.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("30"));
    }
}
