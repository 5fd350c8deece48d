//! Quantum circuit simulators
//!
//! This module provides a simulator that owns a register and runs circuits
//! against it, forward or in reverse.

pub mod config;
pub mod statevector;

pub use config::SimulatorConfig;
pub use statevector::StatevectorSimulator;
