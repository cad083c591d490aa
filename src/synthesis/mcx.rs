// src/synthesis/mcx.rs

//! Bounded-ancilla multi-controlled-NOT synthesis.
//!
//! A k-controlled NOT is built from a binary ladder of Y-rotation /
//! controlled-NOT quartets (relative-phase Toffolis in the style of Iten et
//! al.), interleaving one borrowed ancilla between every second control.
//! Each quartet trades an exact Toffoli for a cheaper block that is only
//! correct up to phase; doubling the whole ladder restores the permutation
//! action for ancillas in any initial state.
//!
//! In isolation the construction can still carry a global phase. Callers
//! must invoke it in mirrored pairs, as the increment synthesizers do, so
//! that phase cancels.

use crate::circuits::Circuit;
use crate::core::{QubitId, QulinError};
use std::f64::consts::FRAC_PI_4;

/// Emits a NOT on the last operand controlled on all preceding operands.
///
/// `operands` is the control qubits followed by the target. Registers of up
/// to three qubits map to the X/CX/CCX primitives directly; larger ones
/// need `operands.len() - 3` ancilla qubits, which may be in any state and
/// are returned to it.
pub fn multi_controlled_x(
    circuit: &mut Circuit,
    operands: &[QubitId],
    ancillas: &[QubitId],
) -> Result<(), QulinError> {
    match operands {
        [] => return Err(QulinError::RegisterTooSmall { needed: 1, available: 0 }),
        [target] => {
            circuit.x(*target);
            return Ok(());
        }
        [control, target] => {
            circuit.cx(*control, *target);
            return Ok(());
        }
        [control1, control2, target] => {
            circuit.ccx(*control1, *control2, *target);
            return Ok(());
        }
        _ => {}
    }

    let needed = operands.len() - 3;
    if ancillas.len() < needed {
        return Err(QulinError::InsufficientAncilla { needed, available: ancillas.len() });
    }

    // Interleave one ancilla after every second control:
    // [c0, c1, a0, c2, a1, c3, ..., target].
    let mut chain: Vec<QubitId> = operands.to_vec();
    for idx in 0..needed {
        chain.insert(2 * (idx + 1), ancillas[idx]);
    }
    let l = chain.len(); // 2 * operands.len() - 3, always odd and >= 5

    for _pass in 0..2 {
        circuit.ccx(chain[l - 3], chain[l - 2], chain[l - 1]);

        // Descend the ladder, folding control pairs into their ancilla.
        for idx in (2..=l - 5).rev().step_by(2) {
            circuit.ry(chain[idx + 2], -FRAC_PI_4);
            circuit.cx(chain[idx + 1], chain[idx + 2]);
            circuit.ry(chain[idx + 2], -FRAC_PI_4);
            circuit.cx(chain[idx], chain[idx + 2]);
        }

        // Innermost block on the first control pair.
        circuit.ry(chain[2], -FRAC_PI_4);
        circuit.cx(chain[1], chain[2]);
        circuit.ry(chain[2], -FRAC_PI_4);
        circuit.cx(chain[0], chain[2]);
        circuit.ry(chain[2], FRAC_PI_4);
        circuit.cx(chain[1], chain[2]);
        circuit.ry(chain[2], FRAC_PI_4);

        // Unwind with the mirrored +π/4 quartets.
        for idx in (2..l - 4).step_by(2) {
            circuit.cx(chain[idx], chain[idx + 2]);
            circuit.ry(chain[idx + 2], FRAC_PI_4);
            circuit.cx(chain[idx + 1], chain[idx + 2]);
            circuit.ry(chain[idx + 2], FRAC_PI_4);
        }
    }

    Ok(())
}
