// src/synthesis/primitives.rs

//! Fixed short gate sequences the recursive schemes bottom out in.
//!
//! The controlled-phase family follows the Shende–Markov constructions:
//! each arity is built from ±θ/2^k phase rotations interleaved with
//! controlled-NOTs, folding into the next-lower arity at half the angle.
//! All three are exact realizations of `diag(1, …, 1, e^{iθ})` on their
//! operands, with no relative or global phase left over.

use crate::circuits::Circuit;
use crate::core::QubitId;

/// Controlled phase: `diag(1, 1, 1, e^{iθ})` on `(control, target)`.
pub fn controlled_phase(circuit: &mut Circuit, theta: f64, control: QubitId, target: QubitId) {
    circuit.phase(control, theta / 2.0);
    circuit.phase(target, theta / 2.0);
    circuit.cx(control, target);
    circuit.phase(target, -theta / 2.0);
    circuit.cx(control, target);
}

/// Doubly-controlled phase: applies `e^{iθ}` iff both controls and the
/// target read 1.
///
/// Four CX/±θ/4 steps distribute the phase over `(c1, t)` and `(c2, t)`
/// parities, then a recursive [`controlled_phase`] at θ/2 closes the
/// books on `(c1, c2)`. This halve-and-recurse shape is the template every
/// larger arity reuses.
pub fn doubly_controlled_phase(
    circuit: &mut Circuit,
    theta: f64,
    control1: QubitId,
    control2: QubitId,
    target: QubitId,
) {
    circuit.cx(control1, target);
    circuit.phase(target, -theta / 4.0);
    circuit.cx(control2, target);
    circuit.phase(target, theta / 4.0);
    circuit.cx(control1, target);
    circuit.phase(target, -theta / 4.0);
    circuit.cx(control2, target);
    circuit.phase(target, theta / 4.0);

    controlled_phase(circuit, theta / 2.0, control1, control2);
}

/// Triply-controlled phase, one halving level deeper: eight ±θ/8 steps
/// folding into a [`doubly_controlled_phase`] at θ/2.
///
/// Only needed as a base case for register segments of exactly four
/// operand qubits in the small-register increment cascade.
pub fn triply_controlled_phase(
    circuit: &mut Circuit,
    theta: f64,
    control1: QubitId,
    control2: QubitId,
    control3: QubitId,
    target: QubitId,
) {
    for _ in 0..2 {
        circuit.phase(target, theta / 8.0);
        circuit.cx(control2, target);
        circuit.phase(target, -theta / 8.0);
        circuit.cx(control1, target);
        circuit.phase(target, theta / 8.0);
        circuit.cx(control2, target);
        circuit.phase(target, -theta / 8.0);
        circuit.cx(control3, target);
    }

    doubly_controlled_phase(circuit, theta / 2.0, control1, control2, control3);
}

/// Three-qubit XOR/AND micro-block used on the way down the borrowed-carry
/// increment ladder.
///
/// `carry` accumulates the AND of `link` and `operand` after their parities
/// have been folded in; [`uz_block`] is its mirror on the way back up.
pub fn ux_block(circuit: &mut Circuit, carry: QubitId, link: QubitId, operand: QubitId) {
    circuit.cx(carry, operand);
    circuit.cx(carry, link);
    circuit.ccx(link, operand, carry);
}

/// Mirror of [`ux_block`].
pub fn uz_block(circuit: &mut Circuit, carry: QubitId, link: QubitId, operand: QubitId) {
    circuit.ccx(link, operand, carry);
    circuit.cx(carry, link);
    circuit.cx(link, operand);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::Circuit;
    use crate::core::QubitId;
    use crate::operations::Gate;

    #[test]
    fn controlled_phase_emits_five_gates() {
        let mut circuit = Circuit::new();
        controlled_phase(&mut circuit, 1.0, QubitId(0), QubitId(1));
        assert_eq!(circuit.len(), 5);
        assert_eq!(
            circuit.gates().iter().filter(|g| g.is_entangling()).count(),
            2
        );
    }

    #[test]
    fn doubly_controlled_phase_folds_into_single() {
        let mut circuit = Circuit::new();
        doubly_controlled_phase(&mut circuit, 2.0, QubitId(0), QubitId(1), QubitId(2));
        // 8 steps plus the recursive controlled_phase tail of 5.
        assert_eq!(circuit.len(), 13);
        // The recursion halves the angle: the tail starts with Phase(θ/4).
        match &circuit.gates()[8] {
            Gate::Phase { theta, .. } => assert!((theta - 0.5).abs() < 1e-12),
            other => panic!("expected Phase gate, got {:?}", other),
        }
    }

    #[test]
    fn ux_uz_are_mirrors_in_length() {
        let mut a = Circuit::new();
        let mut b = Circuit::new();
        ux_block(&mut a, QubitId(0), QubitId(1), QubitId(2));
        uz_block(&mut b, QubitId(0), QubitId(1), QubitId(2));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
    }
}
