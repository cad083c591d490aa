// src/circuits/mod.rs

//! Ordered, append-only sequences of elementary gates.
//!
//! `Circuit` is the sink every synthesizer emits into: gates are appended
//! in call order and never removed or rewritten. Downstream consumers
//! (simulation, gate counting, transpilation) receive the sequence verbatim.

use crate::core::QubitId;
use crate::operations::Gate;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An ordered sequence of gates applied to a set of qubits.
///
/// Emission order is the circuit: equivalence of two circuits is defined
/// only through their net unitary action, never through literal gate-list
/// equality, but the list itself is preserved exactly as built.
#[derive(Clone, PartialEq)] // PartialEq useful for determinism tests
pub struct Circuit {
    /// The unique set of qubits touched by any gate in this circuit.
    qubits: HashSet<QubitId>,

    /// The ordered gate sequence. Order is critical and is never mutated
    /// after a gate has been appended.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Creates a new, empty circuit.
    pub fn new() -> Self {
        Self {
            qubits: HashSet::new(),
            gates: Vec::new(),
        }
    }

    /// Appends a single gate to the end of the sequence.
    ///
    /// The qubits the gate touches are registered automatically.
    pub fn add_gate(&mut self, gate: Gate) {
        for qubit in gate.involved_qubits() {
            self.qubits.insert(qubit);
        }
        self.gates.push(gate);
    }

    /// Appends multiple gates from an iterator.
    pub fn add_gates<I>(&mut self, gates: I)
    where
        I: IntoIterator<Item = Gate>,
    {
        for gate in gates {
            self.add_gate(gate);
        }
    }

    // Emission helpers used throughout the synthesis modules.

    /// Appends a bit flip.
    pub fn x(&mut self, target: QubitId) {
        self.add_gate(Gate::X { target });
    }

    /// Appends a Hadamard.
    pub fn h(&mut self, target: QubitId) {
        self.add_gate(Gate::H { target });
    }

    /// Appends a controlled-NOT.
    pub fn cx(&mut self, control: QubitId, target: QubitId) {
        self.add_gate(Gate::Cx { control, target });
    }

    /// Appends a doubly-controlled-NOT.
    pub fn ccx(&mut self, control1: QubitId, control2: QubitId, target: QubitId) {
        self.add_gate(Gate::Ccx { control1, control2, target });
    }

    /// Appends a Y-rotation.
    pub fn ry(&mut self, target: QubitId, theta: f64) {
        self.add_gate(Gate::Ry { target, theta });
    }

    /// Appends a single-qubit phase rotation.
    pub fn phase(&mut self, target: QubitId, theta: f64) {
        self.add_gate(Gate::Phase { target, theta });
    }

    /// Returns the set of unique qubits involved in this circuit.
    pub fn qubits(&self) -> &HashSet<QubitId> {
        &self.qubits
    }

    /// Returns the ordered gate sequence.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Total number of gates in the circuit.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Returns `true` if the circuit contains no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Largest qubit id appearing in the circuit, if any.
    pub fn max_qubit_id(&self) -> Option<QubitId> {
        self.qubits.iter().max().copied()
    }
}

// Implement Default for convenient creation of empty circuits.
impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

//-------------------------------------------------------------------------
// Circuit Builder
//-------------------------------------------------------------------------

/// A helper struct for constructing `Circuit` instances by method chaining.
pub struct CircuitBuilder {
    circuit: Circuit,
}

impl CircuitBuilder {
    /// Creates a new, empty CircuitBuilder.
    pub fn new() -> Self {
        Self {
            circuit: Circuit::new(),
        }
    }

    /// Adds a single gate to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gate(mut self, gate: Gate) -> Self {
        self.circuit.add_gate(gate);
        self
    }

    /// Adds multiple gates from an iterator to the circuit being built.
    ///
    /// Returns `self` to allow for continued method chaining.
    pub fn add_gates<I>(mut self, gates: I) -> Self
    where
        I: IntoIterator<Item = Gate>,
    {
        self.circuit.add_gates(gates);
        self
    }

    /// Finalizes the construction process and returns the built `Circuit`.
    pub fn build(self) -> Circuit {
        self.circuit
    }
}

// Implement Default for convenient creation of builders.
impl Default for CircuitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.gates.is_empty() {
            return writeln!(f, "qulin::Circuit[0 gates on 0 qubits]");
        }

        // --- Setup ---
        let gates = &self.gates;
        let num_gates = gates.len();

        // Get sorted list of unique qubits and create row map
        let mut sorted_qubits: Vec<QubitId> = self.qubits.iter().cloned().collect();
        sorted_qubits.sort();
        let num_qubits = sorted_qubits.len();
        let qubit_to_row: HashMap<QubitId, usize> = sorted_qubits
            .iter()
            .enumerate()
            .map(|(i, q)| (*q, i))
            .collect();

        // Determine label width
        let max_label_width = sorted_qubits
            .iter()
            .map(|q| format!("{}", q).len())
            .max()
            .unwrap_or(0);
        let label_padding = " ".repeat(max_label_width + 2); // Label + ": "

        // Grid dimensions and padding
        const GATE_WIDTH: usize = 7; // e.g., "───H───"
        const WIRE: &str = "───────"; // GATE_WIDTH dashes
        const V_WIRE: char = '│';
        const H_WIRE: char = '─';

        // op_grid[row][time] stores the gate/wire segment string
        let mut op_grid: Vec<Vec<String>> = vec![vec![WIRE.to_string(); num_gates]; num_qubits];
        // v_connect[row][time] stores the vertical connector char below this row
        let mut v_connect: Vec<Vec<char>> = vec![vec![' '; num_gates]; num_qubits];

        // Helper to center a gate symbol within the column width
        fn format_gate(symbol: &str) -> String {
            let slen = symbol.chars().count();
            if slen >= GATE_WIDTH {
                symbol.chars().take(GATE_WIDTH).collect()
            } else {
                let total_dashes = GATE_WIDTH - slen;
                let pre = total_dashes / 2;
                let post = total_dashes - pre;
                format!(
                    "{}{}{}",
                    H_WIRE.to_string().repeat(pre),
                    symbol,
                    H_WIRE.to_string().repeat(post)
                )
            }
        }

        // Draws vertical wires between the rows a multi-qubit gate spans
        fn connect_rows(v_connect: &mut [Vec<char>], rows: &[usize], t: usize) {
            let r_min = *rows.iter().min().unwrap_or(&0);
            let r_max = *rows.iter().max().unwrap_or(&0);
            for row_vec in v_connect.iter_mut().take(r_max).skip(r_min) {
                row_vec[t] = V_WIRE;
            }
        }

        // --- Populate Grids ---
        for (t, gate) in gates.iter().enumerate() {
            match gate {
                Gate::X { target } | Gate::H { target } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate(gate.name());
                    }
                }
                Gate::Phase { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("P");
                    }
                }
                Gate::Ry { target, .. } => {
                    if let Some(r) = qubit_to_row.get(target) {
                        op_grid[*r][t] = format_gate("RY");
                    }
                }
                Gate::Cx { control, target } => {
                    if let (Some(r_ctrl), Some(r_tgt)) =
                        (qubit_to_row.get(control), qubit_to_row.get(target))
                    {
                        op_grid[*r_ctrl][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate("X");
                        connect_rows(&mut v_connect, &[*r_ctrl, *r_tgt], t);
                    }
                }
                Gate::Ccx { control1, control2, target } => {
                    if let (Some(r1), Some(r2), Some(r_tgt)) = (
                        qubit_to_row.get(control1),
                        qubit_to_row.get(control2),
                        qubit_to_row.get(target),
                    ) {
                        op_grid[*r1][t] = format_gate("@");
                        op_grid[*r2][t] = format_gate("@");
                        op_grid[*r_tgt][t] = format_gate("X");
                        connect_rows(&mut v_connect, &[*r1, *r2, *r_tgt], t);
                    }
                }
            }
        }

        // --- Format Output String ---
        writeln!(f, "qulin::Circuit[{} gates on {} qubits]", num_gates, num_qubits)?;
        for r in 0..num_qubits {
            // Print qubit label row
            let label = format!("{}: ", sorted_qubits[r]);
            write!(f, "{:<width$}", label, width = max_label_width + 2)?;
            writeln!(f, "{}", op_grid[r].join(""))?;

            // Print vertical connector row (if not the last qubit)
            if r < num_qubits - 1 {
                write!(f, "{}", label_padding)?;
                for t in 0..num_gates {
                    let connector = v_connect[r][t];
                    let padding_needed = GATE_WIDTH.saturating_sub(1);
                    let pre = padding_needed / 2;
                    let post = padding_needed - pre;
                    write!(f, "{}{}{}", " ".repeat(pre), connector, " ".repeat(post))?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Keep the Debug impl delegating to Display
impl fmt::Debug for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
