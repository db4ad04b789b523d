//! Error types shared by the simulator and the verification routines.

use thiserror::Error;

/// Errors raised when an operation's preconditions are violated.
///
/// A verification that merely comes out negative is not an error; it is
/// reported through [`crate::verification::VerificationReport`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    /// A gate or label refers to a qubit the system does not have
    #[error("Qubit index {qubit} out of range for a {qubit_count}-qubit system")]
    QubitOutOfRange { qubit: usize, qubit_count: usize },

    /// A gate was given the wrong number of target qubits
    #[error("Gate {gate} acts on {expected} qubits, but {got} qubits were specified")]
    ArityMismatch {
        gate: String,
        expected: usize,
        got: usize,
    },

    #[error("Qubit {0} specified more than once for a single gate")]
    DuplicateQubit(usize),

    /// A vector or matrix does not match the state space dimension
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A state and a circuit disagree on the register size
    #[error("Qubit count mismatch: circuit has {expected} qubits, state has {got}")]
    QubitCountMismatch { expected: usize, got: usize },

    #[error("Basis index {index} out of range for dimension {dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// The dense backend cannot address a register this large
    #[error("{0} qubits exceeds the supported maximum of {max}", max = crate::quantum::state::MAX_QUBITS)]
    TooManyQubits(usize),

    /// Two matrices that must be compared entrywise have different shapes
    #[error("Shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("State vector is not normalized (norm² = {norm_sqr})")]
    NotNormalized { norm_sqr: f64 },

    /// A basis label contained something other than '0' and '1'
    #[error("Invalid basis label {0:?}")]
    InvalidLabel(String),

    #[error("Tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),

    /// No output outcome reached the configured dominance threshold
    #[error("Input {input} has no dominant outcome: best probability {probability:.6} < {threshold}")]
    AmbiguousOutcome {
        input: String,
        probability: f64,
        threshold: f64,
    },

    #[error("Invalid U3 angles: {0}")]
    InvalidAngles(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, QuantumError>;
