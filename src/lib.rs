//! Toffoli decomposition checker
//!
//! This crate checks that a Clifford+T circuit with two black-box
//! single-qubit rotations implements the Toffoli (CCX) gate. It provides a
//! small dense statevector backend, a comparator for unitaries up to global
//! phase, and truth-table extraction over all computational basis inputs.

pub mod error;
pub mod quantum;
pub mod verification;
pub mod config;
pub mod task;

pub use error::{QuantumError, Result};

// Create a prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{U3Angles, VerifyConfig};
    pub use crate::error::{QuantumError, Result};
    pub use crate::quantum::prelude::*;
    pub use crate::task::{build_reference_toffoli, build_task_circuit, verify};
    pub use crate::verification::{global_phase_equivalent, truth_table, TruthTable, VerificationReport};
}
