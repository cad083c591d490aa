//! Error handling logic

use std::fmt;

/// Ordinal identifier of a qubit within a flat register.
///
/// The synthesis algorithms never model qubit state; a `QubitId` is only a
/// name that emitted gates refer to. The same physical qubit may act as an
/// operand at one recursion level and as a borrowed ancilla one level up,
/// so roles are a property of the call site, never of the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QubitId(pub u64);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Error types for synthesis preconditions and simulation failures.
///
/// Every synthesizer validates its documented minimum operand and ancilla
/// counts up front and fails fast instead of emitting an incorrect gate
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum QulinError {
    /// A synthesizer was handed fewer ancilla qubits than its construction
    /// requires.
    InsufficientAncilla {
        /// Minimum number of ancilla qubits the construction needs.
        needed: usize,
        /// Number of ancilla qubits actually supplied.
        available: usize,
    },

    /// A register is shorter than the documented minimum for the operation.
    RegisterTooSmall {
        /// Minimum register length.
        needed: usize,
        /// Actual register length.
        available: usize,
    },

    /// The same qubit appears in two roles that must be distinct
    /// (e.g. control and target of one gate).
    DuplicateQubit {
        /// The offending qubit.
        qubit: QubitId,
    },

    /// A gate refers to a qubit outside the simulated register.
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Size of the simulated register.
        num_qubits: usize,
    },

    /// A state vector has the wrong dimension for the register it is used with.
    DimensionMismatch {
        /// Expected dimension (2^n).
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// General error encountered during the simulation process itself.
    SimulationError {
        /// SimulationError failure message
        message: String,
    },
}

impl fmt::Display for QulinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QulinError::InsufficientAncilla { needed, available } => {
                write!(f, "Insufficient ancilla: need {} but only {} supplied", needed, available)
            }
            QulinError::RegisterTooSmall { needed, available } => {
                write!(f, "Register too small: need {} qubits but got {}", needed, available)
            }
            QulinError::DuplicateQubit { qubit } => {
                write!(f, "Duplicate qubit: {} used in two roles that must be distinct", qubit)
            }
            QulinError::QubitOutOfRange { qubit, num_qubits } => {
                write!(f, "Qubit out of range: {} in a {}-qubit register", qubit, num_qubits)
            }
            QulinError::DimensionMismatch { expected, actual } => {
                write!(f, "State dimension mismatch: expected {} but got {}", expected, actual)
            }
            QulinError::SimulationError { message } => {
                write!(f, "Simulation Process Error: {}", message)
            }
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for QulinError {}
