// src/quantum/gate.rs
//! Quantum gates
//!
//! A [`Gate`] is an immutable description of a primitive, invertible operation
//! on a register. Every gate can render itself, apply itself to a
//! [`Computer`], and apply its exact inverse. A [`Circuit`] is one more gate,
//! so circuits nest freely.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::circuit::Circuit;
use super::computer::Computer;

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// 0
    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

    /// 1
    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = 0.7071067811865475;

    /// e^{iπ/4}, the |1⟩ phase of the T gate
    pub const T_PHASE: Complex64 = Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);

    /// e^{-iπ/4}, the |1⟩ phase of T†
    pub const T_PHASE_CONJ: Complex64 = Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
}

use constants::{ONE, T_PHASE, T_PHASE_CONJ, ZERO};

/// A primitive gate, or a whole circuit used as one gate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard
    Hadamard { bit: usize },

    /// π/4 phase on |1⟩ (T), or -π/4 when `conjugate` is set (T†)
    Phase { bit: usize, conjugate: bool },

    /// Pauli-X (bit flip)
    PauliX { bit: usize },

    /// Pauli-Y
    PauliY { bit: usize },

    /// Pauli-Z (phase flip)
    PauliZ { bit: usize },

    /// Controlled-NOT.
    ///
    /// `control` and `target` are expected to differ; the register decides
    /// what happens when they don't.
    ControlledNot { control: usize, target: usize },

    /// A nested circuit
    Circuit(Circuit),
}

impl Gate {
    pub fn h(bit: usize) -> Self {
        Gate::Hadamard { bit }
    }

    pub fn t(bit: usize) -> Self {
        Gate::Phase { bit, conjugate: false }
    }

    pub fn t_dagger(bit: usize) -> Self {
        Gate::Phase { bit, conjugate: true }
    }

    pub fn x(bit: usize) -> Self {
        Gate::PauliX { bit }
    }

    pub fn y(bit: usize) -> Self {
        Gate::PauliY { bit }
    }

    pub fn z(bit: usize) -> Self {
        Gate::PauliZ { bit }
    }

    pub fn cnot(control: usize, target: usize) -> Self {
        Gate::ControlledNot { control, target }
    }

    /// Compose this gate's unitary into `computer`.
    ///
    /// Errors come straight from the register.
    pub fn apply<C>(&self, computer: &mut C) -> Result<(), C::Error>
    where
        C: Computer + ?Sized,
    {
        match self {
            Gate::Hadamard { bit } => computer.hadamard(*bit),
            Gate::Phase { bit, conjugate: false } => {
                computer.unitary(*bit, ONE, ZERO, ZERO, T_PHASE)
            }
            // T† is T's inverse, nothing more
            Gate::Phase { bit, conjugate: true } => Gate::t(*bit).invert(computer),
            Gate::PauliX { bit } => computer.x(*bit),
            Gate::PauliY { bit } => computer.y(*bit),
            Gate::PauliZ { bit } => computer.z(*bit),
            Gate::ControlledNot { control, target } => computer.cnot(*control, *target),
            Gate::Circuit(circuit) => circuit.apply(computer),
        }
    }

    /// Compose the exact inverse of [`apply`](Gate::apply) into `computer`.
    ///
    /// Every primitive except the phase gate is its own inverse. In
    /// particular Y is undone by a single Y, since Y² = I.
    pub fn invert<C>(&self, computer: &mut C) -> Result<(), C::Error>
    where
        C: Computer + ?Sized,
    {
        match self {
            Gate::Phase { bit, conjugate: false } => {
                computer.unitary(*bit, ONE, ZERO, ZERO, T_PHASE_CONJ)
            }
            Gate::Phase { bit, conjugate: true } => Gate::t(*bit).apply(computer),
            Gate::Circuit(circuit) => circuit.invert(computer),
            Gate::Hadamard { .. }
            | Gate::PauliX { .. }
            | Gate::PauliY { .. }
            | Gate::PauliZ { .. }
            | Gate::ControlledNot { .. } => self.apply(computer),
        }
    }

    /// The gate whose `apply` is this gate's `invert`.
    pub fn adjoint(&self) -> Gate {
        match self {
            Gate::Phase { bit, conjugate } => Gate::Phase { bit: *bit, conjugate: !conjugate },
            Gate::Circuit(circuit) => Gate::Circuit(circuit.adjoint()),
            _ => self.clone(),
        }
    }

    /// `true` when the gate is structurally equal to its own adjoint.
    ///
    /// A circuit qualifies when it reads the same reversed and is built only
    /// from self-inverse gates, e.g. `H(0) X(1) H(0)`.
    pub fn is_self_inverse(&self) -> bool {
        self.adjoint() == *self
    }

    /// Every qubit index this gate touches, in order of first use.
    pub fn qubits(&self) -> Vec<usize> {
        let mut qubits = Vec::new();
        self.collect_qubits(&mut qubits);
        qubits
    }

    pub(crate) fn collect_qubits(&self, acc: &mut Vec<usize>) {
        fn push(acc: &mut Vec<usize>, q: usize) {
            if !acc.contains(&q) {
                acc.push(q);
            }
        }
        match self {
            Gate::Hadamard { bit }
            | Gate::Phase { bit, .. }
            | Gate::PauliX { bit }
            | Gate::PauliY { bit }
            | Gate::PauliZ { bit } => push(acc, *bit),
            Gate::ControlledNot { control, target } => {
                push(acc, *control);
                push(acc, *target);
            }
            Gate::Circuit(circuit) => {
                for gate in circuit {
                    gate.collect_qubits(acc);
                }
            }
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Hadamard { bit } => write!(f, "H({})", bit),
            Gate::Phase { bit, conjugate } => {
                write!(f, "T{}({})", if *conjugate { "*" } else { "" }, bit)
            }
            Gate::PauliX { bit } => write!(f, "X({})", bit),
            Gate::PauliY { bit } => write!(f, "Y({})", bit),
            Gate::PauliZ { bit } => write!(f, "Z({})", bit),
            Gate::ControlledNot { control, target } => {
                write!(f, "CNot({}, {})", control, target)
            }
            Gate::Circuit(circuit) => write!(f, "{}", circuit),
        }
    }
}

impl From<Circuit> for Gate {
    fn from(circuit: Circuit) -> Self {
        Gate::Circuit(circuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_primitives() {
        assert_eq!(Gate::h(2).to_string(), "H(2)");
        assert_eq!(Gate::t(1).to_string(), "T(1)");
        assert_eq!(Gate::t_dagger(1).to_string(), "T*(1)");
        assert_eq!(Gate::x(0).to_string(), "X(0)");
        assert_eq!(Gate::y(3).to_string(), "Y(3)");
        assert_eq!(Gate::z(4).to_string(), "Z(4)");
        assert_eq!(Gate::cnot(0, 1).to_string(), "CNot(0, 1)");
    }

    #[test]
    fn test_adjoint_flips_only_phase() {
        assert_eq!(Gate::t(1).adjoint(), Gate::t_dagger(1));
        assert_eq!(Gate::t_dagger(1).adjoint(), Gate::t(1));
        assert_eq!(Gate::y(0).adjoint(), Gate::y(0));
        assert_eq!(Gate::cnot(2, 0).adjoint(), Gate::cnot(2, 0));
    }

    #[test]
    fn test_self_inverse() {
        assert!(Gate::h(0).is_self_inverse());
        assert!(!Gate::t(0).is_self_inverse());

        let palindrome: Circuit = vec![Gate::h(0), Gate::x(1), Gate::h(0)].into();
        assert!(Gate::from(palindrome).is_self_inverse());

        let skewed: Circuit = vec![Gate::h(0), Gate::x(0)].into();
        assert!(!Gate::from(skewed).is_self_inverse());
    }

    #[test]
    fn test_qubits_in_first_use_order() {
        let circuit: Circuit = vec![Gate::cnot(2, 0), Gate::h(0), Gate::t(1)].into();
        assert_eq!(Gate::from(circuit).qubits(), vec![2, 0, 1]);
    }
}
