// src/simulation/mod.rs

//! Circuit execution against a dense statevector.

mod engine;

use crate::circuits::Circuit;
use crate::core::{QulinError, StateVector};
use engine::SimulationEngine;

/// Runs circuits gate by gate on a statevector. Exact and dense, so it
/// is meant for verification at modest qubit counts, not production
/// workloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator;

impl Simulator {
    pub fn new() -> Self {
        Simulator
    }

    /// Runs `circuit` from |0…0⟩ over the smallest register covering all
    /// its qubit ids.
    pub fn run(&self, circuit: &Circuit) -> Result<StateVector, QulinError> {
        let num_qubits = match circuit.max_qubit_id() {
            Some(qubit) => qubit.0 as usize + 1,
            None => 0,
        };
        self.run_from(circuit, &StateVector::zero_state(num_qubits))
    }

    /// Runs `circuit` from the given initial state.
    pub fn run_from(
        &self,
        circuit: &Circuit,
        initial: &StateVector,
    ) -> Result<StateVector, QulinError> {
        if let Some(max) = circuit.max_qubit_id()
            && max.0 as usize >= initial.num_qubits()
        {
            return Err(QulinError::QubitOutOfRange {
                qubit: max,
                num_qubits: initial.num_qubits(),
            });
        }
        let mut engine = SimulationEngine::new(initial.clone());
        for gate in circuit.gates() {
            engine.apply_gate(gate)?;
        }
        Ok(engine.into_state())
    }
}
