// src/analysis/mod.rs

//! Gate-count and depth accounting for synthesized circuits.

use crate::circuits::Circuit;
use crate::operations::Gate;
use std::collections::HashMap;
use std::fmt;

/// Cost summary for a circuit.
///
/// `two_qubit` counts CX-equivalents: each CX is one, each CCX is the
/// standard six-CX decomposition. Depth counts layers of gates that act
/// on disjoint qubits, with a CCX occupying a single layer across its
/// three qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateCounts {
    pub total: usize,
    pub two_qubit: usize,
    pub depth: usize,
}

impl fmt::Display for GateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "total {} | two-qubit {} | depth {}",
            self.total, self.two_qubit, self.depth
        )
    }
}

/// Tallies gate counts and depth in one pass over the gate list.
pub fn tally(circuit: &Circuit) -> GateCounts {
    let mut counts = GateCounts::default();
    let mut levels: HashMap<crate::core::QubitId, usize> = HashMap::new();

    for gate in circuit.gates() {
        counts.total += 1;
        counts.two_qubit += match gate {
            Gate::Cx { .. } => 1,
            Gate::Ccx { .. } => 6,
            _ => 0,
        };

        let involved = gate.involved_qubits();
        let layer = involved
            .iter()
            .map(|qubit| levels.get(qubit).copied().unwrap_or(0))
            .max()
            .unwrap_or(0)
            + 1;
        for qubit in involved {
            levels.insert(qubit, layer);
        }
        counts.depth = counts.depth.max(layer);
    }

    counts
}
