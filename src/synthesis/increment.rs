// src/synthesis/increment.rs

//! Reversible +1 / −1 over a register, the combinational backbone both
//! top-level schemes share.
//!
//! The register is little-endian in operand order: `operands[0]` is the
//! least significant bit. Incrementing splits the register into two
//! halves, runs a reduced increment over the second half extended by a
//! borrowed carry qubit, fans the carry out, propagates it with a
//! multi-controlled NOT over the first half, and mirrors the whole
//! sequence so every borrowed qubit ends where it started. Decrement is
//! the two's-complement conjugation: bit-flip everything, add one, flip
//! back. Both directions are exact permutations.
//!
//! Ancillas are borrowed, not owned: both entry points restore them from
//! any initial basis state, which is what lets operand qubits of one
//! recursion level serve as ancillas of the next.

use crate::circuits::Circuit;
use crate::core::{QubitId, QulinError};
use crate::synthesis::mcx::multi_controlled_x;
use crate::synthesis::primitives::{
    doubly_controlled_phase, triply_controlled_phase, ux_block, uz_block,
};
use crate::synthesis::rz_ladder::controlled_rz_ternary;
use crate::synthesis::SynthesisConfig;
use std::f64::consts::{FRAC_PI_2, PI};

/// Which way the register moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Add one modulo 2^n.
    Add,
    /// Subtract one modulo 2^n.
    Subtract,
}

/// Splits a register the way the halving recursion does: the first half
/// takes the extra qubit on odd lengths.
fn halves(operands: &[QubitId]) -> (&[QubitId], &[QubitId]) {
    operands.split_at((operands.len() / 2 + 1).min(operands.len()))
}

/// Emits `operands ← operands ± 1 (mod 2^n)` using two borrowed ancillas.
///
/// `ancillas[0]` serves as the carry qubit; both ancillas are returned to
/// their initial state regardless of what that state is.
pub fn increment(
    circuit: &mut Circuit,
    operands: &[QubitId],
    ancillas: &[QubitId],
    direction: Direction,
) -> Result<(), QulinError> {
    if operands.is_empty() {
        return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 });
    }
    if ancillas.is_empty() {
        return Err(QulinError::InsufficientAncilla { needed: 1, available: 0 });
    }

    let (first_half, second_half) = halves(operands);
    let carry = ancillas[0];

    if direction == Direction::Subtract {
        for &qubit in operands {
            circuit.x(qubit);
        }
    }

    // Reduced increment over the second half, with the carry qubit
    // standing in as its low bit.
    let extended: Vec<QubitId> = std::iter::once(carry).chain(second_half.iter().copied()).collect();
    let borrow_pool: Vec<QubitId> = first_half.iter().chain(ancillas[1..].iter()).copied().collect();
    borrowed_increment(circuit, &extended, &borrow_pool)?;

    circuit.x(carry);
    for &qubit in second_half {
        circuit.cx(carry, qubit);
    }

    // Carry propagation: all of the first half conditions a flip of the
    // carry, borrowing the second half as ladder ancillas.
    let propagate: Vec<QubitId> = first_half.iter().copied().chain(std::iter::once(carry)).collect();
    multi_controlled_x(circuit, &propagate, second_half)?;

    borrowed_increment(circuit, &extended, &borrow_pool)?;

    circuit.x(carry);

    multi_controlled_x(circuit, &propagate, second_half)?;

    for &qubit in second_half {
        circuit.cx(carry, qubit);
    }

    // Close with the reduced increment over the first half.
    let tail_pool: Vec<QubitId> = second_half.iter().chain(ancillas.iter()).copied().collect();
    borrowed_increment(circuit, first_half, &tail_pool)?;

    if direction == Direction::Subtract {
        for &qubit in operands {
            circuit.x(qubit);
        }
    }

    Ok(())
}

/// The inner +1: increments `operands` (little-endian) using one borrowed
/// ancilla per operand qubit.
///
/// The carry qubit's state selects between two complementary half-adds;
/// running the doubled ladder once for each polarity makes the sum
/// independent of the borrowed states, which is why none of the ancillas
/// need to be clean.
pub fn borrowed_increment(
    circuit: &mut Circuit,
    operands: &[QubitId],
    ancillas: &[QubitId],
) -> Result<(), QulinError> {
    if operands.is_empty() {
        return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 });
    }
    if ancillas.len() < operands.len() {
        return Err(QulinError::InsufficientAncilla {
            needed: operands.len(),
            available: ancillas.len(),
        });
    }

    let carry = ancillas[0];
    let last = operands[operands.len() - 1];

    circuit.x(carry);
    for &qubit in operands {
        circuit.cx(carry, qubit);
    }
    circuit.x(carry);

    for _pass in 0..2 {
        for idx in 0..operands.len() - 1 {
            ux_block(circuit, carry, ancillas[idx + 1], operands[idx]);
        }
        circuit.cx(carry, last);
        for idx in (0..operands.len() - 1).rev() {
            uz_block(circuit, carry, ancillas[idx + 1], operands[idx]);
        }

        for idx in 0..operands.len() - 1 {
            circuit.x(ancillas[idx + 1]);
        }
    }

    circuit.x(last);

    circuit.x(carry);
    for &qubit in operands {
        circuit.cx(carry, qubit);
    }
    circuit.x(carry);

    Ok(())
}

/// Increment variant for the ancilla-scarce regime.
///
/// Identical contract to [`increment`], but when the first half is shorter
/// than the configured threshold the carry-propagate step switches from
/// the MCX ladder (which would starve for ancillas) to the ternary-split
/// phase-rotation fallback, Hadamard-sandwiched onto the carry. The
/// fallback is invoked at +π/2 on the way in and −π/2 on the way out so
/// its relative phase cancels across the pair.
pub fn small_increment(
    circuit: &mut Circuit,
    operands: &[QubitId],
    ancillas: &[QubitId],
    direction: Direction,
    config: &SynthesisConfig,
) -> Result<(), QulinError> {
    if operands.is_empty() {
        return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 });
    }
    if ancillas.is_empty() {
        return Err(QulinError::InsufficientAncilla { needed: 1, available: 0 });
    }

    let (first_half, second_half) = halves(operands);
    let carry = ancillas[0];

    if direction == Direction::Subtract {
        for &qubit in operands {
            circuit.x(qubit);
        }
    }

    let extended: Vec<QubitId> = std::iter::once(carry).chain(second_half.iter().copied()).collect();
    let borrow_pool: Vec<QubitId> = first_half.iter().chain(ancillas[1..].iter()).copied().collect();
    small_borrowed_increment(circuit, &extended, &borrow_pool, config)?;

    circuit.x(carry);
    for &qubit in second_half {
        circuit.cx(carry, qubit);
    }

    let propagate: Vec<QubitId> = first_half.iter().copied().chain(std::iter::once(carry)).collect();
    let ladder_pool: Vec<QubitId> =
        second_half.iter().chain(ancillas[1..].iter()).copied().collect();

    if first_half.len() < config.small_register_limit {
        circuit.h(carry);
        controlled_rz_ternary(circuit, &propagate, FRAC_PI_2)?;
        circuit.h(carry);
    } else {
        multi_controlled_x(circuit, &propagate, &ladder_pool)?;
    }

    small_borrowed_increment(circuit, &extended, &borrow_pool, config)?;

    circuit.x(carry);

    if first_half.len() < config.small_register_limit {
        circuit.h(carry);
        controlled_rz_ternary(circuit, &propagate, -FRAC_PI_2)?;
        circuit.h(carry);
    } else {
        multi_controlled_x(circuit, &propagate, &ladder_pool)?;
    }

    for &qubit in second_half {
        circuit.cx(carry, qubit);
    }

    let tail_pool: Vec<QubitId> = second_half.iter().chain(ancillas.iter()).copied().collect();
    small_borrowed_increment(circuit, first_half, &tail_pool, config)?;

    if direction == Direction::Subtract {
        for &qubit in operands {
            circuit.x(qubit);
        }
    }

    Ok(())
}

/// Inner +1 for the ancilla-scarce regime.
///
/// Registers longer than the configured limit defer to
/// [`borrowed_increment`]; shorter ones run the direct cascade of
/// multi-controlled NOTs over shrinking prefixes, bottoming out in the
/// Hadamard-sandwiched phase primitives for the last four bits.
pub fn small_borrowed_increment(
    circuit: &mut Circuit,
    operands: &[QubitId],
    ancillas: &[QubitId],
    config: &SynthesisConfig,
) -> Result<(), QulinError> {
    if operands.is_empty() {
        return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 });
    }

    if operands.len() > config.small_register_limit {
        return borrowed_increment(circuit, operands, ancillas);
    }

    for idx in (5..=operands.len()).rev() {
        multi_controlled_x(circuit, &operands[..idx], ancillas)?;
    }

    if operands.len() >= 4 {
        circuit.h(operands[3]);
        triply_controlled_phase(circuit, PI, operands[0], operands[1], operands[2], operands[3]);
        circuit.h(operands[3]);
    }

    if operands.len() >= 3 {
        circuit.h(operands[2]);
        doubly_controlled_phase(circuit, PI, operands[0], operands[1], operands[2]);
        circuit.h(operands[2]);
    }

    if operands.len() >= 2 {
        circuit.cx(operands[0], operands[1]);
    }
    circuit.x(operands[0]);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::Range<u64>) -> Vec<QubitId> {
        range.map(QubitId).collect()
    }

    #[test]
    fn borrowed_increment_needs_one_ancilla_per_operand() {
        let mut circuit = Circuit::new();
        let result = borrowed_increment(&mut circuit, &ids(0..4), &ids(4..7));
        assert_eq!(
            result,
            Err(QulinError::InsufficientAncilla { needed: 4, available: 3 })
        );
    }

    #[test]
    fn decrement_wraps_increment_in_bit_flips() -> Result<(), QulinError> {
        let operands = ids(0..5);
        let ancillas = ids(5..7);

        let mut add = Circuit::new();
        increment(&mut add, &operands, &ancillas, Direction::Add)?;
        let mut sub = Circuit::new();
        increment(&mut sub, &operands, &ancillas, Direction::Subtract)?;

        // Two's-complement conjugation: one X per operand on each side.
        assert_eq!(sub.len(), add.len() + 2 * operands.len());
        Ok(())
    }

    #[test]
    fn one_bit_cascade_is_a_bare_flip() -> Result<(), QulinError> {
        let mut circuit = Circuit::new();
        small_borrowed_increment(
            &mut circuit,
            &ids(0..1),
            &ids(1..4),
            &SynthesisConfig::default(),
        )?;
        assert_eq!(circuit.len(), 1);
        Ok(())
    }
}
