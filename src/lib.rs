//! Invertible quantum gates and circuits
//!
//! This crate models a quantum program as an ordered sequence of primitive,
//! invertible gates (Hadamard, T/T†, Pauli X/Y/Z, controlled-NOT) applied to
//! an abstract register. A circuit is itself a gate: applying it runs its
//! members in order, inverting it runs each member's inverse in reverse.

pub mod error;
pub mod quantum;
pub mod simulators;

pub use error::RegisterError;

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::error::RegisterError;
    pub use crate::quantum::prelude::*;
    pub use crate::simulators::{SimulatorConfig, StatevectorSimulator};
}

// Version and crate information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
