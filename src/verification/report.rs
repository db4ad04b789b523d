//! Outcome of one verification run and its text rendering

use std::fmt;

use serde::Serialize;

use crate::config::VerifyConfig;
use crate::error::Result;
use crate::verification::TruthTable;

/// Process exit status when both checks pass
pub const EXIT_PASS: i32 = 0;
/// Process exit status when a check comes out negative
pub const EXIT_FAIL: i32 = 1;
/// Process exit status when verification could not run
pub const EXIT_ERROR: i32 = 2;

/// Exit status for the outcome of a verification run
pub fn exit_code(outcome: &Result<VerificationReport>) -> i32 {
    match outcome {
        Ok(report) if report.passed() => EXIT_PASS,
        Ok(_) => EXIT_FAIL,
        Err(_) => EXIT_ERROR,
    }
}

/// Everything a verification run found
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub config: VerifyConfig,
    /// Task unitary equals the reference up to a global phase
    pub unitary_equivalent: bool,
    /// Detected global phase as (re, im), when equivalent
    pub global_phase: Option<(f64, f64)>,
    pub task_table: TruthTable,
    pub reference_table: TruthTable,
    pub tables_match: bool,
}

impl VerificationReport {
    pub fn passed(&self) -> bool {
        self.unitary_equivalent && self.tables_match
    }

    pub fn summary_line(&self) -> String {
        if self.passed() {
            format!(
                "PASS: With U3_1 = {} and U3_2 = {}, the circuit equals CCX.",
                self.config.first, self.config.second
            )
        } else {
            "FAIL: Circuits did not match; double-check gate order and parameters.".to_string()
        }
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Unitary Equivalence Check ===")?;
        writeln!(
            f,
            "Equivalent to Toffoli up to global phase: {}",
            self.unitary_equivalent
        )?;
        if let Some((re, im)) = self.global_phase {
            writeln!(f, "Global phase: {:.6}{:+.6}i", re, im)?;
        }

        writeln!(f, "\n=== Truth Table — Task Circuit ===")?;
        write!(f, "{}", self.task_table)?;

        writeln!(f, "\n=== Truth Table — Reference CCX ===")?;
        write!(f, "{}", self.reference_table)?;

        writeln!(f, "\nTruth tables identical: {}", self.tables_match)?;

        writeln!(f, "\n=== Summary ===")?;
        writeln!(f, "{}", self.summary_line())
    }
}
