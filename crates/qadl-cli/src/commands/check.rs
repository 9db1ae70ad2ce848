//! Check command implementation.

use anyhow::Result;
use console::style;
use qadl_parser::ParseOptions;

use super::common::load_circuit;

/// Execute the check command.
pub fn execute(input: &str, options: &ParseOptions) -> Result<()> {
    match load_circuit(input, options) {
        Ok(circuit) => {
            println!(
                "{} {}: circuit '{}' ({} qubits, {} gates, {} modules)",
                style("✓").green().bold(),
                style(input).green(),
                circuit.name(),
                circuit.num_qubits(),
                circuit.total_gate_count(),
                circuit.modules().len()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", style("✗").red().bold(), style(input).red());
            Err(e)
        }
    }
}
