// src/quantum/computer.rs
//! The register contract gates are applied to
//!
//! A [`Computer`] is anything that stores quantum amplitudes and can compose
//! a single-qubit unitary or a controlled bit flip into them. Gates and
//! circuits only ever talk to a register through this trait.

use num_complex::Complex64;

use super::gate::constants::{FRAC_1_SQRT_2, I, ONE, ZERO};

/// Capabilities a quantum register exposes to the gate layer.
///
/// Only [`unitary`](Computer::unitary), [`cnot`](Computer::cnot) and
/// [`label`](Computer::label) are required. The named Pauli and Hadamard
/// rotations default to `unitary` with the standard matrices; registers with
/// dedicated kernels may override them.
///
/// Every operation reports failure through the register's own error type,
/// which the gate layer hands back to its caller untouched.
pub trait Computer {
    /// Error produced by this register
    type Error;

    /// Compose the 2x2 unitary `[[m00, m01], [m10, m11]]` at `bit`
    fn unitary(
        &mut self,
        bit: usize,
        m00: Complex64,
        m01: Complex64,
        m10: Complex64,
        m11: Complex64,
    ) -> Result<(), Self::Error>;

    /// Flip `target` wherever `control` is |1⟩
    fn cnot(&mut self, control: usize, target: usize) -> Result<(), Self::Error>;

    /// Short description for diagnostics
    fn label(&self) -> String;

    /// Hadamard rotation at `bit`
    fn hadamard(&mut self, bit: usize) -> Result<(), Self::Error> {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        self.unitary(bit, s, s, s, -s)
    }

    /// Pauli-X (bit flip) at `bit`
    fn x(&mut self, bit: usize) -> Result<(), Self::Error> {
        self.unitary(bit, ZERO, ONE, ONE, ZERO)
    }

    /// Pauli-Y at `bit`
    fn y(&mut self, bit: usize) -> Result<(), Self::Error> {
        self.unitary(bit, ZERO, -I, I, ZERO)
    }

    /// Pauli-Z (phase flip) at `bit`
    fn z(&mut self, bit: usize) -> Result<(), Self::Error> {
        self.unitary(bit, ONE, ZERO, ZERO, -ONE)
    }
}
