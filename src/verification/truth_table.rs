//! Classical truth tables of near-deterministic circuits
//!
//! Every computational basis input is pushed through the circuit and the
//! output basis state with the largest probability is recorded. This is only
//! meaningful for circuits that map basis states to (phased) basis states,
//! like the Clifford+T decompositions checked here; for a genuinely
//! superposed output the argmax silently picks one outcome. Set a dominance
//! threshold to turn that case into an error instead.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array1;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{QuantumError, Result};
use crate::quantum::state::{basis_label, StateVector, MAX_QUBITS};
use crate::quantum::QuantumCircuit;

/// Outcomes below `1 - SHARP_PEAK_TOLERANCE` are logged as not sharply peaked
pub const SHARP_PEAK_TOLERANCE: f64 = 1e-9;

/// The most likely output for one basis input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruthTableEntry {
    pub output: String,
    pub probability: f64,
}

/// Mapping from input basis label to most likely output basis label.
///
/// Labels put qubit 0 leftmost on both sides. Entries iterate in label order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruthTable {
    qubit_count: usize,
    entries: BTreeMap<String, TruthTableEntry>,
}

impl TruthTable {
    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most likely output label for `input`
    pub fn output(&self, input: &str) -> Option<&str> {
        self.entries.get(input).map(|entry| entry.output.as_str())
    }

    pub fn entry(&self, input: &str) -> Option<&TruthTableEntry> {
        self.entries.get(input)
    }

    /// (input, output) pairs sorted by input label
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(input, entry)| (input.as_str(), entry.output.as_str()))
    }

    /// True when both tables map every input to the same output label.
    ///
    /// Outcome probabilities are not compared.
    pub fn same_mapping(&self, other: &TruthTable) -> bool {
        self.qubit_count == other.qubit_count && self.iter().eq(other.iter())
    }

    /// Inputs whose most likely outcome is not sharply peaked
    pub fn ambiguous_inputs(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.probability < 1.0 - SHARP_PEAK_TOLERANCE)
            .map(|(input, _)| input.as_str())
            .collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let qubits: String = (0..self.qubit_count).map(|q| format!("q{}", q)).collect();
        writeln!(f, "Input({qubits}) -> Output({qubits})")?;
        for (input, output) in self.iter() {
            writeln!(f, "    {} -> {}", input, output)?;
        }
        Ok(())
    }
}

/// Index and probability of the most likely basis state, lowest index on ties
fn most_likely(probabilities: &Array1<f64>) -> (usize, f64) {
    probabilities
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, &p)| {
            if p > best.1 {
                (i, p)
            } else {
                best
            }
        })
}

/// Truth table of `circuit` without a dominance requirement.
pub fn truth_table(circuit: &QuantumCircuit) -> Result<TruthTable> {
    truth_table_with_threshold(circuit, None)
}

/// Truth table of `circuit`.
///
/// With `min_dominance` set, an input whose best outcome has probability
/// below the threshold fails with [`QuantumError::AmbiguousOutcome`].
pub fn truth_table_with_threshold(
    circuit: &QuantumCircuit,
    min_dominance: Option<f64>,
) -> Result<TruthTable> {
    let n = circuit.qubit_count();
    if n > MAX_QUBITS {
        return Err(QuantumError::TooManyQubits(n));
    }
    let mut entries = BTreeMap::new();

    for index in 0..(1usize << n) {
        let input = basis_label(index, n);
        let output_state = circuit.apply(&StateVector::from_label(&input)?)?;

        let (winner, probability) = most_likely(&output_state.probabilities());
        let output = basis_label(winner, n);
        debug!(circuit = circuit.name(), %input, %output, probability, "evaluated basis input");

        if let Some(threshold) = min_dominance {
            if probability < threshold {
                return Err(QuantumError::AmbiguousOutcome {
                    input,
                    probability,
                    threshold,
                });
            }
        }
        if probability < 1.0 - SHARP_PEAK_TOLERANCE {
            warn!(
                circuit = circuit.name(),
                %input,
                probability,
                "output is not a basis state, reporting the most likely outcome"
            );
        }

        entries.insert(input, TruthTableEntry {
            output,
            probability,
        });
    }

    Ok(TruthTable {
        qubit_count: n,
        entries,
    })
}
