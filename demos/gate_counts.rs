// demos/gate_counts.rs

// Prints the cost of synthesizing a multi-controlled NOT at a range of
// register sizes, one row per size.

use qulin::{analysis, QubitId, QulinError, Synthesizer};

fn main() -> Result<(), QulinError> {
    let synth = Synthesizer::new();

    println!("{:>6} {:>10} {:>12} {:>10} {:>8}", "qubits", "scheme", "total", "two-qubit", "depth");
    for n in [8u64, 12, 16, 20, 24, 28, 32, 48, 64] {
        let qubits: Vec<QubitId> = (0..n).map(QubitId).collect();
        let circuit = synth.multi_controlled_not(&qubits)?;
        let counts = analysis::tally(&circuit);
        println!(
            "{:>6} {:>10?} {:>12} {:>10} {:>8}",
            n,
            synth.scheme_for(n as usize),
            counts.total,
            counts.two_qubit,
            counts.depth
        );
    }
    Ok(())
}
