//! The two checks behind a decomposition proof: equality of unitaries up to
//! global phase, and equality of classical truth tables.

pub mod phase;
pub mod truth_table;
pub mod report;

pub use phase::{global_phase_equivalent, relative_phase};
pub use truth_table::{truth_table, truth_table_with_threshold, TruthTable, TruthTableEntry};
pub use report::{exit_code, VerificationReport, EXIT_ERROR, EXIT_FAIL, EXIT_PASS};
