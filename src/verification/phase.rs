//! Equality of unitaries up to a global phase
//!
//! The relative phase is estimated once, from the Frobenius inner product
//! α = Σ conj(U_k)·V_k of the flattened matrices, and then checked entrywise
//! on the complex modulus: |V_k - φ·U_k| ≤ atol for every k. Since
//! |V_k - φ·U_k| = |U_k - conj(φ)·V_k| and the estimate from (V, U) is
//! conj(φ), the check gives the same answer in both argument orders.
//! When V = c·U exactly this recovers c. It is not a rigorous equivalence
//! test for matrices that are close to, but not exactly, phase-related: a
//! single aggregate estimate can miss a better phase for such pairs.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use crate::error::{QuantumError, Result};

fn check_inputs(u: &Array2<Complex64>, v: &Array2<Complex64>, atol: f64) -> Result<()> {
    if !atol.is_finite() || atol < 0.0 {
        return Err(QuantumError::InvalidTolerance(atol));
    }
    if u.shape() != v.shape() {
        return Err(QuantumError::ShapeMismatch {
            left: u.shape().to_vec(),
            right: v.shape().to_vec(),
        });
    }
    Ok(())
}

/// Estimate the unit phase φ with `v ≈ φ·u`.
///
/// Returns `Ok(None)` when the matrices are orthogonal in the flattened
/// inner-product sense (|α| ≤ `atol`) or when some entry of `v - φ·u` has
/// modulus larger than `atol`.
pub fn relative_phase(
    u: &Array2<Complex64>,
    v: &Array2<Complex64>,
    atol: f64,
) -> Result<Option<Complex64>> {
    check_inputs(u, v, atol)?;

    let alpha: Complex64 = u.iter().zip(v.iter()).map(|(a, b)| a.conj() * b).sum();
    if alpha.norm() <= atol {
        debug!(alpha = %alpha, "matrices are orthogonal, no phase to estimate");
        return Ok(None);
    }

    let phase = alpha / alpha.norm();
    debug!(alpha = %alpha, phase = %phase, "estimated relative phase");

    let equivalent = u.iter().zip(v.iter()).all(|(a, b)| (b - phase * a).norm() <= atol);

    Ok(equivalent.then_some(phase))
}

/// Check whether `u` and `v` are equal up to a global phase.
pub fn global_phase_equivalent(
    u: &Array2<Complex64>,
    v: &Array2<Complex64>,
    atol: f64,
) -> Result<bool> {
    Ok(relative_phase(u, v, atol)?.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_recovers_complex_phase() {
        let u = array![[c(0.0, 0.0), c(1.0, 0.0)], [c(1.0, 0.0), c(0.0, 0.0)]];
        let v = u.mapv(|z| z * c(0.0, 1.0));

        let phase = relative_phase(&u, &v, 1e-10).unwrap().unwrap();
        assert!((phase - c(0.0, 1.0)).norm() < 1e-12);
        assert!(global_phase_equivalent(&v, &u, 1e-10).unwrap());
    }

    #[test]
    fn test_near_tolerance_answer_does_not_depend_on_argument_order() {
        let u = Array2::<Complex64>::eye(8);
        let phase = Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4);

        // |0.0009(1 + i)| ≈ 1.27e-3 is over the bound although each part is under it
        let mut outside = u.mapv(|z| z * phase);
        outside[[0, 0]] += c(0.0009, 0.0009);
        assert!(!global_phase_equivalent(&u, &outside, 1e-3).unwrap());
        assert!(!global_phase_equivalent(&outside, &u, 1e-3).unwrap());

        // |0.0006(1 + i)| ≈ 8.5e-4 is inside it
        let mut inside = u.mapv(|z| z * phase);
        inside[[0, 0]] += c(0.0006, 0.0006);
        let forward = relative_phase(&u, &inside, 1e-3).unwrap().unwrap();
        let backward = relative_phase(&inside, &u, 1e-3).unwrap().unwrap();
        assert!((forward - backward.conj()).norm() < 1e-12);
    }

    #[test]
    fn test_orthogonal_matrices_are_not_equivalent() {
        // I and Z are orthogonal under the flattened inner product
        let i = array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]];
        let z = array![[c(1.0, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(-1.0, 0.0)]];
        assert_eq!(relative_phase(&i, &z, 1e-10).unwrap(), None);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let a = Array2::<Complex64>::eye(2);
        let b = Array2::<Complex64>::eye(4);
        assert!(matches!(
            global_phase_equivalent(&a, &b, 1e-10),
            Err(QuantumError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            global_phase_equivalent(&a, &a, -1.0),
            Err(QuantumError::InvalidTolerance(_))
        ));
        assert!(matches!(
            global_phase_equivalent(&a, &a, f64::NAN),
            Err(QuantumError::InvalidTolerance(_))
        ));
    }
}
