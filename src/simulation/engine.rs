// src/simulation/engine.rs

//! Dense statevector engine.
//!
//! Qubit ids map to state-index bits big-endian: qubit 0 is the most
//! significant bit, so the basis index reads off the register in qubit
//! order. Single-qubit gates are applied as 2×2 blocks over index pairs;
//! CX and CCX are pure amplitude swaps and skip the matrix path.

use crate::core::{QubitId, QulinError, StateVector};
use crate::operations::Gate;
use num_complex::Complex;
use std::f64::consts::FRAC_1_SQRT_2;

pub(crate) struct SimulationEngine {
    state: StateVector,
    num_qubits: usize,
}

impl SimulationEngine {
    pub(crate) fn new(initial: StateVector) -> Self {
        let num_qubits = initial.num_qubits();
        SimulationEngine { state: initial, num_qubits }
    }

    pub(crate) fn into_state(self) -> StateVector {
        self.state
    }

    pub(crate) fn apply_gate(&mut self, gate: &Gate) -> Result<(), QulinError> {
        match *gate {
            Gate::X { target } => {
                let k = self.bit_for(target)?;
                self.apply_single(k, &x_matrix());
            }
            Gate::H { target } => {
                let k = self.bit_for(target)?;
                self.apply_single(k, &hadamard_matrix());
            }
            Gate::Ry { target, theta } => {
                let k = self.bit_for(target)?;
                self.apply_single(k, &ry_matrix(theta));
            }
            Gate::Phase { target, theta } => {
                let k = self.bit_for(target)?;
                self.apply_single(k, &phase_matrix(theta));
            }
            Gate::Cx { control, target } => {
                if control == target {
                    return Err(QulinError::DuplicateQubit { qubit: control });
                }
                let c = self.bit_for(control)?;
                let t = self.bit_for(target)?;
                self.apply_controlled_flip(1 << c, 1 << t);
            }
            Gate::Ccx { control1, control2, target } => {
                if control1 == control2 {
                    return Err(QulinError::DuplicateQubit { qubit: control1 });
                }
                if control1 == target || control2 == target {
                    return Err(QulinError::DuplicateQubit { qubit: target });
                }
                let c1 = self.bit_for(control1)?;
                let c2 = self.bit_for(control2)?;
                let t = self.bit_for(target)?;
                self.apply_controlled_flip((1 << c1) | (1 << c2), 1 << t);
            }
        }
        Ok(())
    }

    /// State-index bit position for a qubit id, rejecting ids outside
    /// the register.
    fn bit_for(&self, qubit: QubitId) -> Result<usize, QulinError> {
        let id = qubit.0 as usize;
        if id >= self.num_qubits {
            return Err(QulinError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
        }
        Ok(self.num_qubits - 1 - id)
    }

    fn apply_single(&mut self, k: usize, matrix: &[[Complex<f64>; 2]; 2]) {
        let dim = self.state.dim();
        let low_mask = (1usize << k) - 1;
        let amplitudes = self.state.amplitudes_mut();
        for i in 0..dim / 2 {
            let i0 = ((i >> k) << (k + 1)) | (i & low_mask);
            let i1 = i0 | (1 << k);
            let a0 = amplitudes[i0];
            let a1 = amplitudes[i1];
            amplitudes[i0] = matrix[0][0] * a0 + matrix[0][1] * a1;
            amplitudes[i1] = matrix[1][0] * a0 + matrix[1][1] * a1;
        }
    }

    /// Flips the target bit wherever every control bit is set.
    fn apply_controlled_flip(&mut self, control_mask: usize, target_mask: usize) {
        let dim = self.state.dim();
        let amplitudes = self.state.amplitudes_mut();
        for i in 0..dim {
            if i & control_mask == control_mask && i & target_mask == 0 {
                amplitudes.swap(i, i | target_mask);
            }
        }
    }
}

fn x_matrix() -> [[Complex<f64>; 2]; 2] {
    let zero = Complex::new(0.0, 0.0);
    let one = Complex::new(1.0, 0.0);
    [[zero, one], [one, zero]]
}

fn hadamard_matrix() -> [[Complex<f64>; 2]; 2] {
    let h = Complex::new(FRAC_1_SQRT_2, 0.0);
    [[h, h], [h, -h]]
}

fn ry_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let (sin, cos) = (theta / 2.0).sin_cos();
    [
        [Complex::new(cos, 0.0), Complex::new(-sin, 0.0)],
        [Complex::new(sin, 0.0), Complex::new(cos, 0.0)],
    ]
}

fn phase_matrix(theta: f64) -> [[Complex<f64>; 2]; 2] {
    let zero = Complex::new(0.0, 0.0);
    [[Complex::new(1.0, 0.0), zero], [zero, Complex::from_polar(1.0, theta)]]
}
