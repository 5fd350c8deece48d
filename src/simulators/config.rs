//! Simulator configuration

use serde::{Deserialize, Serialize};

use crate::quantum::state::NORM_TOLERANCE;

/// Configuration for [`StatevectorSimulator`](super::StatevectorSimulator)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Number of qubits in the register
    ///
    /// Default: 1
    pub qubit_count: usize,

    /// Tolerance for normalization checks and state comparisons
    ///
    /// Default: 1e-10
    pub tolerance: f64,

    /// Label reported by the simulator as a register; falls back to the
    /// state vector's own label when unset.
    ///
    /// Default: None
    pub label: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            qubit_count: 1,
            tolerance: NORM_TOLERANCE,
            label: None,
        }
    }
}

impl SimulatorConfig {
    /// Default configuration for `qubit_count` qubits
    pub fn new(qubit_count: usize) -> Self {
        Self {
            qubit_count,
            ..Self::default()
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
