//! Run configuration: the two black-box rotations and the numerical tolerances

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QuantumError, Result};

/// Default absolute tolerance for unitary comparison
pub const DEFAULT_ATOL: f64 = 1e-10;

/// Euler angles of a U3(θ, φ, λ) rotation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct U3Angles {
    pub theta: f64,
    pub phi: f64,
    pub lambda: f64,
}

impl U3Angles {
    pub const fn new(theta: f64, phi: f64, lambda: f64) -> Self {
        U3Angles { theta, phi, lambda }
    }

    /// U3(π/2, 0, π), a Hadamard
    pub const HADAMARD: U3Angles = U3Angles::new(PI / 2.0, 0.0, PI);

    /// U3(0, 0, -π/4), a T†
    pub const T_DAGGER: U3Angles = U3Angles::new(0.0, 0.0, -PI / 4.0);

    pub fn is_finite(&self) -> bool {
        self.theta.is_finite() && self.phi.is_finite() && self.lambda.is_finite()
    }
}

/// Render an angle as a small multiple of π when it is one
fn fmt_angle(angle: f64) -> String {
    if angle.abs() < 1e-12 {
        return "0".to_string();
    }

    let ratio = angle / PI;
    for denom in [1i64, 2, 4, 8] {
        let scaled = ratio * denom as f64;
        let k = scaled.round();
        if (scaled - k).abs() < 1e-9 {
            let k = k as i64;
            let sign = if k < 0 { "-" } else { "" };
            let num = match k.abs() {
                1 => "π".to_string(),
                n => format!("{}π", n),
            };
            return if denom == 1 {
                format!("{sign}{num}")
            } else {
                format!("{sign}{num}/{denom}")
            };
        }
    }

    format!("{:.6}", angle)
}

impl fmt::Display for U3Angles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "U3({}, {}, {})",
            fmt_angle(self.theta),
            fmt_angle(self.phi),
            fmt_angle(self.lambda)
        )
    }
}

/// Parse one angle: a plain number, or `[-][k][*]pi[/d]`
fn parse_angle(s: &str) -> Result<f64> {
    let invalid = || QuantumError::InvalidAngles(format!("cannot parse angle {:?}", s));

    let s = s.trim();
    if let Ok(value) = s.parse::<f64>() {
        return Ok(value);
    }

    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s),
    };
    let (num, denom) = match rest.split_once('/') {
        Some((num, denom)) => (num, denom.trim().parse::<f64>().map_err(|_| invalid())?),
        None => (rest, 1.0),
    };

    let factor = num
        .trim()
        .strip_suffix("pi")
        .or_else(|| num.trim().strip_suffix('π'))
        .ok_or_else(invalid)?
        .trim_end_matches('*');
    let factor = if factor.is_empty() {
        1.0
    } else {
        factor.parse::<f64>().map_err(|_| invalid())?
    };

    if denom == 0.0 {
        return Err(invalid());
    }
    Ok(sign * factor * PI / denom)
}

impl FromStr for U3Angles {
    type Err = QuantumError;

    /// Parse `θ,φ,λ`, e.g. `pi/2,0,pi`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 3 {
            return Err(QuantumError::InvalidAngles(format!(
                "expected three comma-separated angles, got {:?}",
                s
            )));
        }

        Ok(U3Angles::new(
            parse_angle(parts[0])?,
            parse_angle(parts[1])?,
            parse_angle(parts[2])?,
        ))
    }
}

/// Configuration of a verification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Rotation placed in the first black box (on the target qubit)
    pub first: U3Angles,
    /// Rotation placed in the second black box (on the target qubit)
    pub second: U3Angles,
    /// Absolute tolerance for the phase-equivalence check
    pub atol: f64,
    /// Reject truth tables whose best outcome falls below this probability
    pub min_dominance: Option<f64>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            first: U3Angles::HADAMARD,
            second: U3Angles::T_DAGGER,
            atol: DEFAULT_ATOL,
            min_dominance: None,
        }
    }
}

impl VerifyConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.atol.is_finite() || self.atol < 0.0 {
            return Err(QuantumError::InvalidTolerance(self.atol));
        }
        if let Some(threshold) = self.min_dominance {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(QuantumError::InvalidTolerance(threshold));
            }
        }
        for angles in [&self.first, &self.second] {
            if !angles.is_finite() {
                return Err(QuantumError::InvalidAngles(format!(
                    "non-finite angle in {:?}",
                    angles
                )));
            }
        }
        Ok(())
    }
}
