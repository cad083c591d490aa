// src/core/state.rs

use crate::core::error::QulinError;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// A full statevector over an n-qubit register.
///
/// Amplitudes are indexed by computational basis state, with qubit 0 as the
/// most significant bit: index `k` is the basis state `|b_0 b_1 … b_{n-1}⟩`
/// where `b_i` is bit `n-1-i` of `k`.
///
/// The synthesis core never touches this type; it exists for the
/// verification collaborators (`Simulator` and the test suite).
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct StateVector {
    amplitudes: Vec<Complex<f64>>,
    num_qubits: usize,
}

impl StateVector {
    /// Creates the all-zeros state `|0…0⟩` over `num_qubits` qubits.
    pub fn zero_state(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[0] = Complex::new(1.0, 0.0);
        Self { amplitudes, num_qubits }
    }

    /// Creates the computational basis state `|index⟩`.
    pub fn basis_state(num_qubits: usize, index: usize) -> Result<Self, QulinError> {
        let dim = 1usize << num_qubits;
        if index >= dim {
            return Err(QulinError::DimensionMismatch { expected: dim, actual: index + 1 });
        }
        let mut amplitudes = vec![Complex::zero(); dim];
        amplitudes[index] = Complex::new(1.0, 0.0);
        Ok(Self { amplitudes, num_qubits })
    }

    /// Creates the uniform superposition `H^{⊗n}|0…0⟩`.
    pub fn uniform_state(num_qubits: usize) -> Self {
        let dim = 1usize << num_qubits;
        let amp = Complex::new(1.0 / (dim as f64).sqrt(), 0.0);
        Self { amplitudes: vec![amp; dim], num_qubits }
    }

    /// Wraps an explicit amplitude vector, which must have length 2^n.
    pub fn from_amplitudes(
        amplitudes: Vec<Complex<f64>>,
        num_qubits: usize,
    ) -> Result<Self, QulinError> {
        let dim = 1usize << num_qubits;
        if amplitudes.len() != dim {
            return Err(QulinError::DimensionMismatch { expected: dim, actual: amplitudes.len() });
        }
        Ok(Self { amplitudes, num_qubits })
    }

    /// Number of qubits this state spans.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state vector (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only access to the amplitudes.
    pub fn amplitudes(&self) -> &[Complex<f64>] {
        &self.amplitudes
    }

    /// Mutable access for the simulation engine.
    pub(crate) fn amplitudes_mut(&mut self) -> &mut [Complex<f64>] {
        &mut self.amplitudes
    }

    /// Euclidean norm of the state vector.
    pub fn norm(&self) -> f64 {
        self.amplitudes.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
    }

    /// If the state is (numerically) a single basis state, returns its
    /// index: the `k` with `|c_k|^2 > 1 - tolerance`.
    ///
    /// Permutation-style circuits (increments, multi-controlled NOTs) map
    /// basis states to basis states up to phase, so this is how their
    /// action is read back out of a simulation.
    pub fn dominant_basis_state(&self, tolerance: f64) -> Option<usize> {
        self.amplitudes
            .iter()
            .position(|c| c.norm_sqr() > 1.0 - tolerance)
    }
}

impl fmt::Display for StateVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateVector[")?;
        for (i, c) in self.amplitudes.iter().enumerate() {
            write!(f, "{}{:.4}", if i > 0 { ", " } else { "" }, c)?;
        }
        write!(f, "]")
    }
}
