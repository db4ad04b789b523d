// src/quantum/gate.rs
//! Quantum gates
//!
//! Gates carry their own small unitary matrix and know how to embed it into
//! an n-qubit system. The embedding keeps the order of the target qubits as
//! given: the first target is the most significant qubit of the gate matrix,
//! so `CNOT` on `[1, 0]` is controlled by qubit 1.

use std::fmt::Debug;

use ndarray::{array, Array1, Array2};
use num_complex::Complex64;

use super::state::{StateVector, MAX_QUBITS};
use crate::error::{QuantumError, Result};

/// Common complex numbers used in quantum gates
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);

    /// 1/sqrt(2)
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
}

/// Trait for quantum gates
pub trait QuantumGate: Debug + Send + Sync {
    /// Returns the number of qubits this gate acts on
    fn qubit_count(&self) -> usize;

    /// Returns the matrix representation of this gate
    fn matrix(&self) -> Array2<Complex64>;

    /// Returns a display name for this gate
    fn name(&self) -> String;

    fn clone_box(&self) -> Box<dyn QuantumGate>;

    /// Apply this gate to specific qubits in a state
    fn apply_to_qubits(&self, state: &StateVector, qubits: &[usize]) -> Result<StateVector> {
        let full_matrix = self.embed(state.qubit_count(), qubits)?;
        state.apply_matrix(&full_matrix)
    }

    /// Expand the gate matrix to a `total_qubits` system acting on `target_qubits`
    fn embed(&self, total_qubits: usize, target_qubits: &[usize]) -> Result<Array2<Complex64>> {
        check_targets(self, total_qubits, target_qubits)?;

        let gate_matrix = self.matrix();
        let dim = 1 << total_qubits;
        let num_target = target_qubits.len();

        // Bits of the full index that belong to target qubits
        let target_mask = target_qubits
            .iter()
            .fold(0usize, |mask, &q| mask | (1 << (total_qubits - 1 - q)));

        let sub_index = |full: usize| -> usize {
            target_qubits.iter().enumerate().fold(0, |acc, (k, &q)| {
                let bit = (full >> (total_qubits - 1 - q)) & 1;
                acc | (bit << (num_target - 1 - k))
            })
        };

        let mut result = Array2::zeros((dim, dim));
        for i in 0..dim {
            for j in 0..dim {
                // Non-target bits pass through untouched
                if (i & !target_mask) != (j & !target_mask) {
                    continue;
                }
                result[[i, j]] = gate_matrix[[sub_index(i), sub_index(j)]];
            }
        }

        Ok(result)
    }
}

/// Validate that `targets` is a legal placement of `gate` on `total_qubits` qubits
pub(crate) fn check_targets<G: QuantumGate + ?Sized>(
    gate: &G,
    total_qubits: usize,
    targets: &[usize],
) -> Result<()> {
    if total_qubits > MAX_QUBITS {
        return Err(QuantumError::TooManyQubits(total_qubits));
    }

    if targets.len() != gate.qubit_count() {
        return Err(QuantumError::ArityMismatch {
            gate: gate.name(),
            expected: gate.qubit_count(),
            got: targets.len(),
        });
    }

    for (k, &q) in targets.iter().enumerate() {
        if q >= total_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit: q,
                qubit_count: total_qubits,
            });
        }
        if targets[..k].contains(&q) {
            return Err(QuantumError::DuplicateQubit(q));
        }
    }

    Ok(())
}

impl Clone for Box<dyn QuantumGate> {
    fn clone(&self) -> Box<dyn QuantumGate> {
        self.clone_box()
    }
}

/// Fixed gates of the Clifford+T set, plus the Toffoli reference
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StandardGate {
    /// Identity gate on the given number of qubits
    I(usize),

    /// Pauli-X gate (NOT gate)
    X,

    /// Hadamard gate
    H,

    /// Phase gate (S gate)
    S,

    Sdg,

    /// π/8 gate (T gate)
    T,

    Tdg,

    /// CNOT gate, first qubit is the control
    CNOT,

    /// Toffoli gate (CCNOT), first two qubits are the controls
    Toffoli,
}

impl QuantumGate for StandardGate {
    fn qubit_count(&self) -> usize {
        match self {
            StandardGate::I(n) => *n,
            StandardGate::X
            | StandardGate::H
            | StandardGate::S
            | StandardGate::Sdg
            | StandardGate::T
            | StandardGate::Tdg => 1,
            StandardGate::CNOT => 2,
            StandardGate::Toffoli => 3,
        }
    }

    fn matrix(&self) -> Array2<Complex64> {
        use constants::*;
        match self {
            StandardGate::I(n) => Array2::from_diag(&Array1::from_elem(1 << n, ONE)),
            StandardGate::X => array![[ZERO, ONE], [ONE, ZERO]],
            StandardGate::H => {
                let factor = Complex64::new(FRAC_1_SQRT_2, 0.0);
                array![[factor, factor], [factor, -factor]]
            }
            StandardGate::S => array![[ONE, ZERO], [ZERO, I]],
            StandardGate::Sdg => array![[ONE, ZERO], [ZERO, -I]],
            StandardGate::T => {
                array![[ONE, ZERO], [ZERO, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)]]
            }
            StandardGate::Tdg => {
                array![[ONE, ZERO], [ZERO, Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)]]
            }
            StandardGate::CNOT => array![
                [ONE, ZERO, ZERO, ZERO],
                [ZERO, ONE, ZERO, ZERO],
                [ZERO, ZERO, ZERO, ONE],
                [ZERO, ZERO, ONE, ZERO]
            ],
            StandardGate::Toffoli => {
                let mut matrix = Array2::zeros((8, 8));
                for i in 0..8 {
                    // Flip the last qubit only if both controls are set
                    let j = if i & 0b110 == 0b110 { i ^ 1 } else { i };
                    matrix[[j, i]] = ONE;
                }
                matrix
            }
        }
    }

    fn name(&self) -> String {
        match self {
            StandardGate::I(n) => format!("I({})", n),
            StandardGate::X => "X".to_string(),
            StandardGate::H => "H".to_string(),
            StandardGate::S => "S".to_string(),
            StandardGate::Sdg => "S†".to_string(),
            StandardGate::T => "T".to_string(),
            StandardGate::Tdg => "T†".to_string(),
            StandardGate::CNOT => "CNOT".to_string(),
            StandardGate::Toffoli => "Toffoli".to_string(),
        }
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }
}

/// Parametrized single-qubit gates
#[derive(Clone, Debug, PartialEq)]
pub enum ParametrizedGate {
    /// General single-qubit unitary U3(θ, φ, λ)
    U3(f64, f64, f64),
}

impl QuantumGate for ParametrizedGate {
    fn qubit_count(&self) -> usize {
        1
    }

    fn matrix(&self) -> Array2<Complex64> {
        match self {
            ParametrizedGate::U3(theta, phi, lambda) => {
                let cos = (theta / 2.0).cos();
                let sin = (theta / 2.0).sin();
                array![
                    [Complex64::new(cos, 0.0), -Complex64::from_polar(sin, *lambda)],
                    [Complex64::from_polar(sin, *phi), Complex64::from_polar(cos, phi + lambda)]
                ]
            }
        }
    }

    fn name(&self) -> String {
        match self {
            ParametrizedGate::U3(theta, phi, lambda) => {
                format!("U3({:.4}, {:.4}, {:.4})", theta, phi, lambda)
            }
        }
    }

    fn clone_box(&self) -> Box<dyn QuantumGate> {
        Box::new(self.clone())
    }
}
