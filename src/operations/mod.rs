// src/operations/mod.rs

//! Defines the elementary gate alphabet the synthesizers emit.
//!
//! The decomposition schemes only ever produce six gate kinds: bit flip,
//! Hadamard, controlled-NOT, doubly-controlled-NOT, Y-rotation and a
//! single-qubit phase rotation. Operand order carries meaning (control vs.
//! target) and is preserved exactly as emitted.

use crate::core::QubitId;

/// One elementary gate in an emitted sequence.
///
/// Angles are plain radians. Two gates compare equal only when their kinds,
/// operands and angle bit patterns all agree, which is what the determinism
/// guarantee of the synthesizers is stated against.
#[derive(Debug, Clone, PartialEq)] // PartialEq on f64 is fine: synthesis is deterministic.
pub enum Gate {
    /// Pauli-X bit flip.
    X {
        /// The flipped qubit.
        target: QubitId,
    },

    /// Hadamard.
    H {
        /// The rotated qubit.
        target: QubitId,
    },

    /// Controlled-NOT.
    Cx {
        /// Control qubit.
        control: QubitId,
        /// Target qubit, flipped when the control reads 1.
        target: QubitId,
    },

    /// Doubly-controlled-NOT (Toffoli).
    Ccx {
        /// First control qubit.
        control1: QubitId,
        /// Second control qubit.
        control2: QubitId,
        /// Target qubit, flipped when both controls read 1.
        target: QubitId,
    },

    /// Y-axis rotation by `theta` radians.
    ///
    /// Only emitted with ±π/4 by the relative-phase Toffoli ladder; the
    /// angle is still carried explicitly so the gate list stays
    /// self-describing.
    Ry {
        /// The rotated qubit.
        target: QubitId,
        /// Rotation angle in radians.
        theta: f64,
    },

    /// Single-qubit phase rotation `diag(1, e^{iθ})`.
    Phase {
        /// The phased qubit.
        target: QubitId,
        /// Phase angle in radians.
        theta: f64,
    },
}

impl Gate {
    /// Returns the qubits this gate acts on, controls first, in the order
    /// that matters for its semantics.
    pub fn involved_qubits(&self) -> Vec<QubitId> {
        match self {
            Gate::X { target } => vec![*target],
            Gate::H { target } => vec![*target],
            Gate::Cx { control, target } => vec![*control, *target],
            Gate::Ccx { control1, control2, target } => vec![*control1, *control2, *target],
            Gate::Ry { target, .. } => vec![*target],
            Gate::Phase { target, .. } => vec![*target],
        }
    }

    /// True for gates coupling more than one qubit.
    pub fn is_entangling(&self) -> bool {
        matches!(self, Gate::Cx { .. } | Gate::Ccx { .. })
    }

    /// Short mnemonic used by the circuit renderer.
    pub fn name(&self) -> &'static str {
        match self {
            Gate::X { .. } => "X",
            Gate::H { .. } => "H",
            Gate::Cx { .. } => "CX",
            Gate::Ccx { .. } => "CCX",
            Gate::Ry { .. } => "RY",
            Gate::Phase { .. } => "P",
        }
    }
}
