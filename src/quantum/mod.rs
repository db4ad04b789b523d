// src/quantum/mod.rs
//! A small dense statevector backend
//!
//! Circuits are built from an ordered gate list, turned into their full
//! unitary, or applied to a state. That is all the verification routines
//! need from a simulator.

pub mod state;
pub mod gate;
pub mod circuit;

pub use state::{basis_index, basis_label, StateVector};
pub use gate::{ParametrizedGate, QuantumGate, StandardGate};
pub use circuit::{CircuitBuilder, QuantumCircuit};

/// Re-export commonly used types and traits
pub mod prelude {
    pub use super::{CircuitBuilder, QuantumCircuit, QuantumGate, StateVector};
    pub use super::{ParametrizedGate, StandardGate};
}
