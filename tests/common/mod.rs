//! Shared helpers for integration tests

#![allow(dead_code)]

use std::convert::Infallible;

use num_complex::Complex64;
use qgates::quantum::{Computer, StateVector};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const TOLERANCE: f64 = 1e-10;

/// One register call seen by [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Unitary(usize, [Complex64; 4]),
    Cnot(usize, usize),
    Hadamard(usize),
    X(usize),
    Y(usize),
    Z(usize),
}

/// A register that only remembers what it was asked to do
#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
}

impl Computer for Recorder {
    type Error = Infallible;

    fn unitary(
        &mut self,
        bit: usize,
        m00: Complex64,
        m01: Complex64,
        m10: Complex64,
        m11: Complex64,
    ) -> Result<(), Infallible> {
        self.calls.push(Call::Unitary(bit, [m00, m01, m10, m11]));
        Ok(())
    }

    fn cnot(&mut self, control: usize, target: usize) -> Result<(), Infallible> {
        self.calls.push(Call::Cnot(control, target));
        Ok(())
    }

    fn label(&self) -> String {
        "Recorder".to_string()
    }

    fn hadamard(&mut self, bit: usize) -> Result<(), Infallible> {
        self.calls.push(Call::Hadamard(bit));
        Ok(())
    }

    fn x(&mut self, bit: usize) -> Result<(), Infallible> {
        self.calls.push(Call::X(bit));
        Ok(())
    }

    fn y(&mut self, bit: usize) -> Result<(), Infallible> {
        self.calls.push(Call::Y(bit));
        Ok(())
    }

    fn z(&mut self, bit: usize) -> Result<(), Infallible> {
        self.calls.push(Call::Z(bit));
        Ok(())
    }
}

/// Deterministic random states for property checks
pub fn random_states(qubit_count: usize, count: usize, seed: u64) -> Vec<StateVector> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| StateVector::random(qubit_count, &mut rng).unwrap())
        .collect()
}
