//! The decomposition under test and the reference it must match
//!
//! The task circuit is a Clifford+T Toffoli decomposition on qubits
//! q0, q1 (controls) and q2 (target) with two single-qubit gates on q2
//! left as black boxes. Filling them with U3(π/2, 0, π) (a Hadamard) and
//! U3(0, 0, -π/4) (a T†) reproduces CCX exactly.

use tracing::{debug, info};

use crate::config::{U3Angles, VerifyConfig};
use crate::error::Result;
use crate::quantum::{CircuitBuilder, QuantumCircuit};
use crate::verification::{relative_phase, truth_table_with_threshold, VerificationReport};

pub const QUBIT_COUNT: usize = 3;

const TARGET: usize = 2;

/// Build the task circuit with `first` and `second` in the two black boxes
pub fn build_task_circuit(first: U3Angles, second: U3Angles) -> Result<QuantumCircuit> {
    let mut b = CircuitBuilder::named("task", QUBIT_COUNT);

    b.u3(TARGET, first.theta, first.phi, first.lambda)?;
    b.t(0)?;
    b.cnot(0, 1)?;
    b.tdg(1)?;
    b.cnot(0, 1)?;
    b.t(1)?;
    b.cnot(1, TARGET)?;
    b.tdg(TARGET)?;
    b.cnot(0, TARGET)?;
    b.t(TARGET)?;
    b.cnot(1, TARGET)?;

    b.u3(TARGET, second.theta, second.phi, second.lambda)?;

    b.cnot(0, TARGET)?;
    b.t(TARGET)?;
    b.h(TARGET)?;

    Ok(b.build())
}

/// A single CCX with controls q0, q1 and target q2
pub fn build_reference_toffoli() -> Result<QuantumCircuit> {
    let mut b = CircuitBuilder::named("ccx", QUBIT_COUNT);
    b.toffoli(0, 1, TARGET)?;
    Ok(b.build())
}

/// Run both checks for `config` and collect the results.
///
/// A negative outcome is a report with `passed() == false`; errors are
/// reserved for invalid configuration and, when a dominance threshold is
/// set, for outputs without a dominant basis state.
pub fn verify(config: &VerifyConfig) -> Result<VerificationReport> {
    config.validate()?;

    let task = build_task_circuit(config.first, config.second)?;
    let reference = build_reference_toffoli()?;
    debug!(circuit = %task, "built task circuit");

    let phase = relative_phase(&reference.unitary()?, &task.unitary()?, config.atol)?;
    let unitary_equivalent = phase.is_some();
    info!(unitary_equivalent, "compared unitaries up to global phase");

    let task_table = truth_table_with_threshold(&task, config.min_dominance)?;
    let reference_table = truth_table_with_threshold(&reference, config.min_dominance)?;
    let tables_match = task_table.same_mapping(&reference_table);
    info!(tables_match, "compared truth tables");

    Ok(VerificationReport {
        config: config.clone(),
        unitary_equivalent,
        global_phase: phase.map(|p| (p.re, p.im)),
        task_table,
        reference_table,
        tables_match,
    })
}
