// src/quantum/circuit.rs
//! Quantum circuits
//!
//! A [`Circuit`] is an ordered list of [`Gate`]s. Applying it runs the gates
//! front to back; inverting it runs each gate's inverse back to front, so
//! `(AB)⁻¹ = B⁻¹A⁻¹` holds by construction.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::computer::Computer;
use super::gate::Gate;

/// An ordered sequence of gates; insertion order is execution order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit(Vec<Gate>);

impl Circuit {
    /// Create a new empty circuit
    pub fn new() -> Self {
        Circuit(Vec::new())
    }

    /// Append a gate (or a whole sub-circuit as one gate)
    pub fn push(&mut self, gate: impl Into<Gate>) -> &mut Self {
        self.0.push(gate.into());
        self
    }

    /// Builder form of [`push`](Circuit::push)
    pub fn then(mut self, gate: impl Into<Gate>) -> Self {
        self.0.push(gate.into());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn gates(&self) -> &[Gate] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gate> {
        self.0.iter()
    }

    /// Run every gate in insertion order.
    ///
    /// Stops at the first register error; gates before it stay applied.
    pub fn apply<C>(&self, computer: &mut C) -> Result<(), C::Error>
    where
        C: Computer + ?Sized,
    {
        for gate in &self.0 {
            trace!(%gate, "apply");
            gate.apply(computer)?;
        }
        Ok(())
    }

    /// Run every gate's inverse in reverse insertion order.
    pub fn invert<C>(&self, computer: &mut C) -> Result<(), C::Error>
    where
        C: Computer + ?Sized,
    {
        for gate in self.0.iter().rev() {
            trace!(%gate, "invert");
            gate.invert(computer)?;
        }
        Ok(())
    }

    /// This circuit followed by `other`
    pub fn concat(&self, other: &Circuit) -> Circuit {
        self.0.iter().chain(other.0.iter()).cloned().collect()
    }

    /// The circuit whose `apply` is this circuit's `invert`: members reversed,
    /// each replaced by its adjoint.
    pub fn adjoint(&self) -> Circuit {
        self.0.iter().rev().map(Gate::adjoint).collect()
    }

    /// Smallest register size every gate fits in (highest index + 1).
    pub fn qubit_span(&self) -> usize {
        let mut qubits = Vec::new();
        for gate in &self.0 {
            gate.collect_qubits(&mut qubits);
        }
        qubits.into_iter().max().map_or(0, |q| q + 1)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, gate) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", gate)?;
        }
        Ok(())
    }
}

impl From<Vec<Gate>> for Circuit {
    fn from(gates: Vec<Gate>) -> Self {
        Circuit(gates)
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Circuit(iter.into_iter().collect())
    }
}

impl Extend<Gate> for Circuit {
    fn extend<I: IntoIterator<Item = Gate>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Circuit {
    type Item = Gate;
    type IntoIter = std::vec::IntoIter<Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Gate;
    type IntoIter = std::slice::Iter<'a, Gate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add for Circuit {
    type Output = Circuit;

    fn add(mut self, rhs: Circuit) -> Circuit {
        self.0.extend(rhs.0);
        self
    }
}
