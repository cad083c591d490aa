// src/synthesis/rz_ladder.rs

//! Ancilla-free multiply-controlled phase rotation via ternary splitting.
//!
//! The controls are carved into three near-equal groups; conjugating each
//! group's boundary qubit with Hadamards turns a phase on it into a
//! parity kick, and interleaving ±θ/4 rotations on the target with those
//! kicks telescopes into the full controlled rotation. Each level recurses
//! at a fixed ±π/2 angle, so depth grows with log of the control count
//! rather than linearly. No ancillas are consumed anywhere in the tree,
//! which is what the scarce-ancilla increment variant relies on.

use crate::circuits::Circuit;
use crate::core::{QubitId, QulinError};

/// Emits a multiply-controlled `Rz(2θ)` on the last qubit of `qubits`,
/// controlled on all the others, exact up to global phase.
///
/// Needs at least three qubits; the two-control base case is written out
/// directly.
pub fn controlled_rz_ternary(
    circuit: &mut Circuit,
    qubits: &[QubitId],
    theta: f64,
) -> Result<(), QulinError> {
    if qubits.len() < 3 {
        return Err(QulinError::RegisterTooSmall { needed: 3, available: qubits.len() });
    }

    if qubits.len() == 3 {
        let (c1, c2, target) = (qubits[0], qubits[1], qubits[2]);
        circuit.cx(c1, target);
        circuit.phase(target, -theta / 2.0);
        circuit.cx(c2, target);
        circuit.phase(target, theta / 2.0);
        circuit.cx(c1, target);
        circuit.phase(target, -theta / 2.0);
        circuit.cx(c2, target);
        circuit.phase(target, theta / 2.0);
        return Ok(());
    }

    let target = qubits[qubits.len() - 1];
    let controls = &qubits[..qubits.len() - 1];

    // Three-way split of the controls, remainder going to the first group.
    let third = controls.len() / 3;
    let second = (controls.len() - third) / 2;
    let first = controls.len() - third - second;

    let group_one: Vec<QubitId> =
        controls[..first].iter().copied().chain(std::iter::once(target)).collect();
    let group_two: Vec<QubitId> =
        controls[first..first + second].iter().copied().chain(std::iter::once(target)).collect();
    let group_three: Vec<QubitId> =
        controls[first + second..].iter().copied().chain(std::iter::once(target)).collect();

    let quarter = theta / 4.0;
    let half_pi = std::f64::consts::FRAC_PI_2;

    circuit.phase(target, quarter);
    hadamard_conjugated_rz(circuit, &group_three, half_pi)?;
    circuit.phase(target, -quarter);
    hadamard_conjugated_rz(circuit, &group_two, half_pi)?;
    circuit.phase(target, quarter);
    hadamard_conjugated_rz(circuit, &group_three, half_pi)?;
    circuit.phase(target, -quarter);
    hadamard_conjugated_rz(circuit, &group_one, half_pi)?;
    circuit.phase(target, quarter);
    hadamard_conjugated_rz(circuit, &group_three, -half_pi)?;
    circuit.phase(target, -quarter);
    hadamard_conjugated_rz(circuit, &group_two, -half_pi)?;
    circuit.phase(target, quarter);
    hadamard_conjugated_rz(circuit, &group_three, -half_pi)?;
    circuit.phase(target, -quarter);
    hadamard_conjugated_rz(circuit, &group_one, -half_pi)?;

    Ok(())
}

/// Controlled rotation with its last qubit Hadamard-conjugated, so the
/// phase kick lands on the parity of the group. Two qubits bottom out in
/// a plain CX.
fn hadamard_conjugated_rz(
    circuit: &mut Circuit,
    qubits: &[QubitId],
    theta: f64,
) -> Result<(), QulinError> {
    if qubits.len() < 2 {
        return Err(QulinError::RegisterTooSmall { needed: 2, available: qubits.len() });
    }

    if qubits.len() == 2 {
        circuit.cx(qubits[0], qubits[1]);
        return Ok(());
    }

    let last = qubits[qubits.len() - 1];
    circuit.h(last);
    controlled_rz_ternary(circuit, qubits, theta)?;
    circuit.h(last);
    Ok(())
}
