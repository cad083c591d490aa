// src/verification/mod.rs

//! Checks used to validate synthesized circuits against their intended
//! action.

use crate::core::{QulinError, StateVector};
use num_complex::Complex;

/// Default amplitude tolerance for floating-point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Confirms a state is normalized to within `tolerance` (defaulting to
/// [`DEFAULT_TOLERANCE`]).
pub fn check_normalization(
    state: &StateVector,
    tolerance: Option<f64>,
) -> Result<(), QulinError> {
    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let norm = state.norm();
    if (norm - 1.0).abs() > tolerance {
        return Err(QulinError::SimulationError {
            message: format!("state norm {norm} deviates from 1 beyond tolerance {tolerance}"),
        });
    }
    Ok(())
}

/// Whether two states agree up to a single global phase.
///
/// The phase is read off the first amplitude of `a` above `tolerance`;
/// relative-phase constructions that differ per basis state will fail
/// this check, which is the point.
pub fn equal_up_to_global_phase(a: &StateVector, b: &StateVector, tolerance: f64) -> bool {
    if a.dim() != b.dim() {
        return false;
    }
    let reference = a
        .amplitudes()
        .iter()
        .zip(b.amplitudes())
        .find(|(amp_a, _)| amp_a.norm() > tolerance);
    let Some((amp_a, amp_b)) = reference else {
        // `a` is numerically zero; equal only if `b` is too.
        return b.amplitudes().iter().all(|amp| amp.norm() <= tolerance);
    };
    let phase: Complex<f64> = amp_b / amp_a;
    a.amplitudes()
        .iter()
        .zip(b.amplitudes())
        .all(|(amp_a, amp_b)| (amp_b - phase * amp_a).norm() <= tolerance)
}
