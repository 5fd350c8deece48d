// src/quantum/mod.rs
//! Quantum gates, circuits and the register they act on
//!
//! Gates and circuits are immutable descriptions; the only mutable state is
//! the [`Computer`] passed to `apply`/`invert`.

pub mod circuit;
pub mod computer;
pub mod gate;
pub mod state;

pub use circuit::Circuit;
pub use computer::Computer;
pub use gate::Gate;
pub use state::StateVector;

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{Circuit, Computer, Gate, StateVector};
}
