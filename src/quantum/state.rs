// src/quantum/state.rs
//! Dense state vector register
//!
//! [`StateVector`] is the reference [`Computer`]: 2^n complex amplitudes in
//! an `ndarray::Array1`, with qubit 0 as the most significant bit of the
//! basis index.

use std::fmt;

use ndarray::Array1;
use num_complex::Complex64;
use rand::Rng;

use super::computer::Computer;
use crate::error::RegisterError;

/// Default tolerance for normalization checks
pub const NORM_TOLERANCE: f64 = 1e-10;

/// Widest register a dense state vector will allocate
pub const MAX_QUBITS: usize = 30;

/// Number of amplitudes for `qubit_count` qubits, or an error past [`MAX_QUBITS`]
pub fn dimension_for(qubit_count: usize) -> Result<usize, RegisterError> {
    if qubit_count > MAX_QUBITS {
        return Err(RegisterError::TooManyQubits {
            qubit_count,
            max: MAX_QUBITS,
        });
    }
    Ok(1 << qubit_count)
}

/// State vector representation of a quantum register
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    qubit_count: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create a new state vector with the given amplitudes
    pub fn new(qubit_count: usize, amplitudes: Array1<Complex64>) -> Result<Self, RegisterError> {
        Self::with_tolerance(qubit_count, amplitudes, NORM_TOLERANCE)
    }

    /// Like [`new`](StateVector::new), with a caller-chosen normalization tolerance
    pub fn with_tolerance(
        qubit_count: usize,
        amplitudes: Array1<Complex64>,
        tolerance: f64,
    ) -> Result<Self, RegisterError> {
        let expected = dimension_for(qubit_count)?;
        if amplitudes.len() != expected {
            return Err(RegisterError::DimensionMismatch {
                expected,
                actual: amplitudes.len(),
            });
        }

        let state = StateVector { qubit_count, amplitudes };
        let norm_sqr = state.norm_sqr();
        if (norm_sqr - 1.0).abs() > tolerance {
            return Err(RegisterError::NotNormalized(norm_sqr));
        }

        Ok(state)
    }

    /// Create a new state vector in the computational basis state |index⟩
    pub fn computational_basis(qubit_count: usize, index: usize) -> Result<Self, RegisterError> {
        let dimension = dimension_for(qubit_count)?;
        if index >= dimension {
            return Err(RegisterError::BasisIndexOutOfRange { index, dimension });
        }

        let mut amplitudes = Array1::zeros(dimension);
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(StateVector { qubit_count, amplitudes })
    }

    /// Create the zero state |00...0⟩
    pub fn zero_state(qubit_count: usize) -> Result<Self, RegisterError> {
        Self::computational_basis(qubit_count, 0)
    }

    /// Draw a random normalized state
    pub fn random<R>(qubit_count: usize, rng: &mut R) -> Result<Self, RegisterError>
    where
        R: Rng + ?Sized,
    {
        let mut amplitudes: Array1<Complex64> = (0..dimension_for(qubit_count)?)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect();

        let norm = amplitudes.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
        if norm == 0.0 {
            return Self::zero_state(qubit_count);
        }
        amplitudes.mapv_inplace(|a| a / norm);

        Ok(StateVector { qubit_count, amplitudes })
    }

    /// Return to |00...0⟩ in place
    pub fn set_zero(&mut self) {
        self.amplitudes.fill(Complex64::new(0.0, 0.0));
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the amplitudes
    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Probability of observing basis state `index`; 0 when out of range
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes.get(index).map_or(0.0, |a| a.norm_sqr())
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// ⟨self|other⟩
    ///
    /// Panics if the states have different dimensions.
    pub fn inner_product(&self, other: &Self) -> Complex64 {
        assert_eq!(
            self.dimension(),
            other.dimension(),
            "Dimension mismatch in inner product"
        );
        self.amplitudes
            .iter()
            .zip(other.amplitudes.iter())
            .map(|(a, b)| a.conj() * b)
            .sum()
    }

    /// Amplitude-wise equality within `tolerance`
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && self
                .amplitudes
                .iter()
                .zip(other.amplitudes.iter())
                .all(|(a, b)| (a - b).norm() <= tolerance)
    }

    /// Equality up to a global phase: |⟨self|other⟩| is 1 within `tolerance`
    pub fn approx_eq_up_to_phase(&self, other: &Self, tolerance: f64) -> bool {
        self.dimension() == other.dimension()
            && (self.inner_product(other).norm() - 1.0).abs() <= tolerance
    }

    // Bit mask of `bit` in a basis index
    fn mask(&self, bit: usize) -> Result<usize, RegisterError> {
        if bit >= self.qubit_count {
            return Err(RegisterError::out_of_range(bit, self.qubit_count));
        }
        Ok(1 << (self.qubit_count - 1 - bit))
    }
}

impl Computer for StateVector {
    type Error = RegisterError;

    fn unitary(
        &mut self,
        bit: usize,
        m00: Complex64,
        m01: Complex64,
        m10: Complex64,
        m11: Complex64,
    ) -> Result<(), RegisterError> {
        let mask = self.mask(bit)?;
        for i in (0..self.dimension()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let a0 = self.amplitudes[i];
            let a1 = self.amplitudes[j];
            self.amplitudes[i] = m00 * a0 + m01 * a1;
            self.amplitudes[j] = m10 * a0 + m11 * a1;
        }
        Ok(())
    }

    fn cnot(&mut self, control: usize, target: usize) -> Result<(), RegisterError> {
        let control_mask = self.mask(control)?;
        let target_mask = self.mask(target)?;
        if control == target {
            return Err(RegisterError::ControlIsTarget(control));
        }

        for i in 0..self.dimension() {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }
        Ok(())
    }

    fn label(&self) -> String {
        format!("StateVector({} qubits)", self.qubit_count)
    }

    fn x(&mut self, bit: usize) -> Result<(), RegisterError> {
        let mask = self.mask(bit)?;
        for i in (0..self.dimension()).filter(|i| i & mask == 0) {
            self.amplitudes.swap(i, i | mask);
        }
        Ok(())
    }

    fn z(&mut self, bit: usize) -> Result<(), RegisterError> {
        let mask = self.mask(bit)?;
        for (i, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if i & mask != 0 {
                *amplitude = -*amplitude;
            }
        }
        Ok(())
    }
}

impl fmt::Display for StateVector {
    /// Non-zero amplitudes in ket notation, e.g. `(0.7071+0i)|00⟩ + (0.7071+0i)|11⟩`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, amplitude) in self.amplitudes.iter().enumerate() {
            if amplitude.norm() < NORM_TOLERANCE {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            write!(f, "({:.4})|{:0width$b}⟩", amplitude, i, width = self.qubit_count)?;
        }
        Ok(())
    }
}
