// src/quantum/state.rs
//! Statevector representation of an n-qubit register.
//!
//! Amplitudes are indexed big-endian in qubit order: qubit 0 is the most
//! significant bit of the amplitude index. Basis labels are read left to
//! right with qubit 0 first, so the label of index `i` is simply the n-bit
//! binary rendering of `i`. [`basis_label`] and [`basis_index`] are the only
//! places that convert between the two, and every caller goes through them.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::error::{QuantumError, Result};

/// Normalization tolerance for state vectors
pub const NORM_TOLERANCE: f64 = 1e-10;

/// Largest register the dense backend accepts
pub const MAX_QUBITS: usize = 16;

fn check_qubit_count(qubit_count: usize) -> Result<()> {
    if qubit_count > MAX_QUBITS {
        return Err(QuantumError::TooManyQubits(qubit_count));
    }
    Ok(())
}

/// Render an amplitude index as a basis label (qubit 0 leftmost).
pub fn basis_label(index: usize, qubit_count: usize) -> String {
    (0..qubit_count)
        .map(|q| {
            let shift = (qubit_count - 1 - q) as u32;
            if index.checked_shr(shift).unwrap_or(0) & 1 == 1 { '1' } else { '0' }
        })
        .collect()
}

/// Parse a basis label (qubit 0 leftmost) into an amplitude index.
pub fn basis_index(label: &str) -> Result<usize> {
    if label.is_empty() || label.len() >= usize::BITS as usize {
        return Err(QuantumError::InvalidLabel(label.to_string()));
    }

    label.chars().try_fold(0usize, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok((acc << 1) | 1),
        _ => Err(QuantumError::InvalidLabel(label.to_string())),
    })
}

/// State vector representation of a quantum state
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    qubit_count: usize,
    amplitudes: Array1<Complex64>,
}

impl StateVector {
    /// Create a new state vector with the given amplitudes
    pub fn new(qubit_count: usize, amplitudes: Array1<Complex64>) -> Result<Self> {
        check_qubit_count(qubit_count)?;
        let expected = 1 << qubit_count;
        if amplitudes.len() != expected {
            return Err(QuantumError::DimensionMismatch {
                expected,
                got: amplitudes.len(),
            });
        }

        let state = StateVector {
            qubit_count,
            amplitudes,
        };

        if !state.is_valid() {
            return Err(QuantumError::NotNormalized {
                norm_sqr: state.norm_sqr(),
            });
        }

        Ok(state)
    }

    /// Create the computational basis state |index⟩
    pub fn computational_basis(qubit_count: usize, index: usize) -> Result<Self> {
        check_qubit_count(qubit_count)?;
        let dim = 1 << qubit_count;
        if index >= dim {
            return Err(QuantumError::IndexOutOfRange {
                index,
                dimension: dim,
            });
        }

        let mut amplitudes = Array1::zeros(dim);
        amplitudes[index] = Complex64::new(1.0, 0.0);

        Ok(StateVector {
            qubit_count,
            amplitudes,
        })
    }

    /// Create the basis state named by `label`, e.g. `"110"` is |q0=1, q1=1, q2=0⟩
    pub fn from_label(label: &str) -> Result<Self> {
        let index = basis_index(label)?;
        Self::computational_basis(label.len(), index)
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Dimension of the Hilbert space (2^n for n qubits)
    pub fn dimension(&self) -> usize {
        1 << self.qubit_count
    }

    pub fn amplitudes(&self) -> &Array1<Complex64> {
        &self.amplitudes
    }

    /// Sum of squared amplitude magnitudes
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|amp| amp.norm_sqr()).sum()
    }

    /// Check that the state is normalized
    pub fn is_valid(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() < NORM_TOLERANCE
    }

    /// Probability of observing the basis state with the given index
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes
            .get(index)
            .map(|amp| amp.norm_sqr())
            .unwrap_or(0.0)
    }

    /// Probabilities of every basis state, in amplitude-index order
    pub fn probabilities(&self) -> Array1<f64> {
        self.amplitudes.mapv(|amp| amp.norm_sqr())
    }

    /// Apply a full-system matrix to this state vector
    pub fn apply_matrix(&self, matrix: &Array2<Complex64>) -> Result<Self> {
        let dim = self.dimension();
        if matrix.shape() != [dim, dim] {
            return Err(QuantumError::ShapeMismatch {
                left: vec![dim, dim],
                right: matrix.shape().to_vec(),
            });
        }

        Ok(StateVector {
            qubit_count: self.qubit_count,
            amplitudes: matrix.dot(&self.amplitudes),
        })
    }
}
