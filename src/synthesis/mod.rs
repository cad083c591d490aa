// src/synthesis/mod.rs

//! Decomposition of multiply-controlled phase gates into one- and
//! two-qubit gates, with no qubits beyond the operated register.
//!
//! Two register-wide schemes share a common shape: bracket the register
//! with a +1 and a −1 increment, and let a descending ladder of
//! controlled phases with halved alternating-sign angles telescope into
//! the full C^{n-1}(P(θ)). The large scheme runs the increment over all
//! but the last qubit, borrowing the target; the small scheme reserves
//! the last two qubits as shared controls and leans on the ancilla-free
//! rotation fallback where the increment would otherwise starve for
//! borrowed qubits. Registers of up to three qubits go straight to the
//! exact primitives.

pub mod increment;
pub mod mcx;
pub mod primitives;
pub mod rz_ladder;

use crate::circuits::Circuit;
use crate::core::{QubitId, QulinError};
use increment::{increment, small_increment, Direction};
use primitives::{controlled_phase, doubly_controlled_phase};
use std::collections::HashSet;
use std::f64::consts::PI;

/// Tuning knobs for scheme selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    /// Largest register the small scheme handles; anything above goes to
    /// the large scheme.
    pub small_scheme_max_qubits: usize,
    /// Registers at most this long use the direct increment cascade, and
    /// carry propagation over shorter first halves switches to the
    /// rotation fallback.
    pub small_register_limit: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        SynthesisConfig { small_scheme_max_qubits: 22, small_register_limit: 10 }
    }
}

/// Which decomposition a register size maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Up to three qubits, written out exactly.
    DirectPrimitive,
    /// The ancilla-scarce middle range.
    Small,
    /// The asymptotic scheme.
    Large,
}

/// Entry point for synthesizing multiply-controlled gates.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    pub fn new() -> Self {
        Synthesizer::default()
    }

    pub fn with_config(config: SynthesisConfig) -> Self {
        Synthesizer { config }
    }

    /// The scheme a register of `num_qubits` qubits dispatches to.
    pub fn scheme_for(&self, num_qubits: usize) -> Scheme {
        if num_qubits <= 3 {
            Scheme::DirectPrimitive
        } else if num_qubits <= self.config.small_scheme_max_qubits {
            Scheme::Small
        } else {
            Scheme::Large
        }
    }

    /// Synthesizes C^{n-1}(P(θ)) over `qubits` (last qubit the target)
    /// into a fresh circuit.
    pub fn controlled_phase(&self, qubits: &[QubitId], theta: f64) -> Result<Circuit, QulinError> {
        let mut circuit = Circuit::new();
        self.controlled_phase_into(&mut circuit, qubits, theta)?;
        Ok(circuit)
    }

    /// Appends C^{n-1}(P(θ)) over `qubits` to an existing circuit.
    pub fn controlled_phase_into(
        &self,
        circuit: &mut Circuit,
        qubits: &[QubitId],
        theta: f64,
    ) -> Result<(), QulinError> {
        validate_register(qubits)?;

        match self.scheme_for(qubits.len()) {
            Scheme::DirectPrimitive => {
                match *qubits {
                    [target] => circuit.phase(target, theta),
                    [control, target] => controlled_phase(circuit, theta, control, target),
                    [c1, c2, target] => doubly_controlled_phase(circuit, theta, c1, c2, target),
                    _ => unreachable!(),
                }
                Ok(())
            }
            Scheme::Small => small_scheme(circuit, qubits, theta, &self.config),
            Scheme::Large => large_scheme(circuit, qubits, theta),
        }
    }

    /// Synthesizes C^{n-1}(X) over `qubits` (last qubit the target) by
    /// Hadamard-conjugating the phase decomposition at θ = π.
    pub fn multi_controlled_not(&self, qubits: &[QubitId]) -> Result<Circuit, QulinError> {
        validate_register(qubits)?;
        let target = qubits[qubits.len() - 1];
        let mut circuit = Circuit::new();
        if qubits.len() == 1 {
            circuit.x(target);
            return Ok(circuit);
        }
        circuit.h(target);
        self.controlled_phase_into(&mut circuit, qubits, PI)?;
        circuit.h(target);
        Ok(circuit)
    }
}

fn validate_register(qubits: &[QubitId]) -> Result<(), QulinError> {
    if qubits.is_empty() {
        return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 });
    }
    let mut seen = HashSet::new();
    for &qubit in qubits {
        if !seen.insert(qubit) {
            return Err(QulinError::DuplicateQubit { qubit });
        }
    }
    Ok(())
}

/// The asymptotic decomposition, split on register parity.
///
/// Even registers increment all but the target, borrowing the target as
/// the dirty carry; odd registers reserve the last two qubits as shared
/// controls so every phase in the ladder is doubly controlled. Either
/// way the ±1 bracket converts each controlled phase's kickback on the
/// incremented value into the exact diagonal on the all-ones state.
pub fn large_scheme(circuit: &mut Circuit, qubits: &[QubitId], theta: f64) -> Result<(), QulinError> {
    let n = qubits.len();
    if n < 4 {
        return Err(QulinError::RegisterTooSmall { needed: 4, available: n });
    }
    let target = qubits[n - 1];
    let half = theta / 2.0;

    if n % 2 == 0 {
        increment(circuit, &qubits[..n - 1], &qubits[n - 1..], Direction::Add)?;

        let mut idx_theta = half;
        for &qubit in qubits[1..n - 1].iter().rev() {
            controlled_phase(circuit, -idx_theta, qubit, target);
            idx_theta /= 2.0;
        }

        increment(circuit, &qubits[..n - 1], &qubits[n - 1..], Direction::Subtract)?;

        idx_theta = half;
        for &qubit in qubits[1..n - 1].iter().rev() {
            controlled_phase(circuit, idx_theta, qubit, target);
            idx_theta /= 2.0;
        }

        controlled_phase(circuit, idx_theta * 2.0, qubits[0], target);
    } else {
        let shared = qubits[n - 2];

        increment(circuit, &qubits[..n - 2], &qubits[n - 2..], Direction::Add)?;

        let mut idx_theta = half;
        for &qubit in qubits[1..n - 2].iter().rev() {
            doubly_controlled_phase(circuit, -idx_theta, qubit, shared, target);
            idx_theta /= 2.0;
        }

        increment(circuit, &qubits[..n - 2], &qubits[n - 2..], Direction::Subtract)?;

        idx_theta = half;
        for &qubit in qubits[1..n - 2].iter().rev() {
            doubly_controlled_phase(circuit, idx_theta, qubit, shared, target);
            idx_theta /= 2.0;
        }

        doubly_controlled_phase(circuit, idx_theta * 2.0, qubits[0], shared, target);
    }

    Ok(())
}

/// The ancilla-scarce decomposition.
///
/// Same ladder as the odd branch of [`large_scheme`], but the increments
/// are the variants that fall back to the ancilla-free rotation where the
/// borrowed pool runs dry.
pub fn small_scheme(
    circuit: &mut Circuit,
    qubits: &[QubitId],
    theta: f64,
    config: &SynthesisConfig,
) -> Result<(), QulinError> {
    let n = qubits.len();
    if n < 4 {
        return Err(QulinError::RegisterTooSmall { needed: 4, available: n });
    }
    let target = qubits[n - 1];
    let shared = qubits[n - 2];
    let half = theta / 2.0;

    small_increment(circuit, &qubits[..n - 2], &qubits[n - 2..], Direction::Add, config)?;

    let mut idx_theta = half;
    for &qubit in qubits[1..n - 2].iter().rev() {
        doubly_controlled_phase(circuit, -idx_theta, qubit, shared, target);
        idx_theta /= 2.0;
    }

    small_increment(circuit, &qubits[..n - 2], &qubits[n - 2..], Direction::Subtract, config)?;

    idx_theta = half;
    for &qubit in qubits[1..n - 2].iter().rev() {
        doubly_controlled_phase(circuit, idx_theta, qubit, shared, target);
        idx_theta /= 2.0;
    }

    doubly_controlled_phase(circuit, idx_theta * 2.0, qubits[0], shared, target);

    Ok(())
}
