// src/quantum/circuit.rs
use std::fmt;

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{QuantumError, Result};
use crate::quantum::gate::{check_targets, ParametrizedGate, QuantumGate, StandardGate};
use crate::quantum::state::{StateVector, MAX_QUBITS};

/// A quantum circuit consisting of a sequence of gates
#[derive(Debug, Clone)]
pub struct QuantumCircuit {
    name: String,
    gates: Vec<(Box<dyn QuantumGate>, Vec<usize>)>,
    qubit_count: usize,
}

impl QuantumCircuit {
    /// Create a new empty quantum circuit
    pub fn new(qubit_count: usize) -> Self {
        Self::with_name("circuit", qubit_count)
    }

    pub fn with_name(name: impl Into<String>, qubit_count: usize) -> Self {
        QuantumCircuit {
            name: name.into(),
            gates: Vec::new(),
            qubit_count,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qubit_count(&self) -> usize {
        self.qubit_count
    }

    /// Append a gate acting on `qubits`, in the gate's own qubit order
    pub fn add_gate(&mut self, gate: Box<dyn QuantumGate>, qubits: &[usize]) -> Result<()> {
        check_targets(gate.as_ref(), self.qubit_count, qubits)?;
        self.gates.push((gate, qubits.to_vec()));
        Ok(())
    }

    /// Get the number of gates in the circuit
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    pub fn gates(&self) -> &[(Box<dyn QuantumGate>, Vec<usize>)] {
        &self.gates
    }

    /// Apply the circuit to a quantum state
    pub fn apply(&self, state: &StateVector) -> Result<StateVector> {
        if state.qubit_count() != self.qubit_count {
            return Err(QuantumError::QubitCountMismatch {
                expected: self.qubit_count,
                got: state.qubit_count(),
            });
        }

        self.gates
            .iter()
            .try_fold(state.clone(), |current, (gate, qubits)| {
                gate.apply_to_qubits(&current, qubits)
            })
    }

    /// The full unitary of the circuit, later gates multiplied on the left
    pub fn unitary(&self) -> Result<Array2<Complex64>> {
        if self.qubit_count > MAX_QUBITS {
            return Err(QuantumError::TooManyQubits(self.qubit_count));
        }
        let identity = StandardGate::I(self.qubit_count).matrix();

        self.gates.iter().try_fold(identity, |acc, (gate, qubits)| {
            let full = gate.embed(self.qubit_count, qubits)?;
            Ok(full.dot(&acc))
        })
    }
}

impl fmt::Display for QuantumCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} qubits, {} gates)",
            self.name,
            self.qubit_count,
            self.gates.len()
        )?;
        for (gate, qubits) in &self.gates {
            let targets = qubits
                .iter()
                .map(|q| format!("q{}", q))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "  {} {}", gate.name(), targets)?;
        }
        Ok(())
    }
}

/// A builder for quantum circuits
pub struct CircuitBuilder {
    circuit: QuantumCircuit,
}

impl CircuitBuilder {
    /// Create a new circuit builder
    pub fn new(qubit_count: usize) -> Self {
        CircuitBuilder {
            circuit: QuantumCircuit::new(qubit_count),
        }
    }

    pub fn named(name: impl Into<String>, qubit_count: usize) -> Self {
        CircuitBuilder {
            circuit: QuantumCircuit::with_name(name, qubit_count),
        }
    }

    /// Build the quantum circuit
    pub fn build(self) -> QuantumCircuit {
        self.circuit
    }

    pub fn add_gate<G: QuantumGate + 'static>(&mut self, gate: G, qubits: &[usize]) -> Result<()> {
        self.circuit.add_gate(Box::new(gate), qubits)
    }

    /// Add a Hadamard gate
    pub fn h(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::H, &[qubit])
    }

    /// Add a Pauli-X gate
    pub fn x(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::X, &[qubit])
    }

    pub fn s(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::S, &[qubit])
    }

    pub fn sdg(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::Sdg, &[qubit])
    }

    pub fn t(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::T, &[qubit])
    }

    pub fn tdg(&mut self, qubit: usize) -> Result<()> {
        self.add_gate(StandardGate::Tdg, &[qubit])
    }

    /// Add a CNOT gate
    pub fn cnot(&mut self, control: usize, target: usize) -> Result<()> {
        self.add_gate(StandardGate::CNOT, &[control, target])
    }

    /// Add a Toffoli gate (CCNOT)
    pub fn toffoli(&mut self, control1: usize, control2: usize, target: usize) -> Result<()> {
        self.add_gate(StandardGate::Toffoli, &[control1, control2, target])
    }

    /// Add a general single-qubit U3(θ, φ, λ) gate
    pub fn u3(&mut self, qubit: usize, theta: f64, phi: f64, lambda: f64) -> Result<()> {
        self.add_gate(ParametrizedGate::U3(theta, phi, lambda), &[qubit])
    }
}
