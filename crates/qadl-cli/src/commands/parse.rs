//! Parse command implementation.

use std::io::{self, Write};

use anyhow::{Context, Result};
use console::style;
use qadl_ir::{CircuitDefinition, HardwareValue};
use qadl_parser::ParseOptions;

use super::common::load_circuit;
use crate::config::OutputFormat;

/// Execute the parse command.
pub fn execute(input: &str, format: OutputFormat, options: &ParseOptions) -> Result<()> {
    let circuit = load_circuit(input, options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &circuit)
                .context("Failed to serialize circuit")?;
            writeln!(out)?;
        }
        OutputFormat::Summary => {
            writeln!(
                out,
                "{} Parsed {}",
                style("✓").green().bold(),
                style(input).green()
            )?;
            write_summary(&mut out, &circuit, 1)?;
        }
    }

    Ok(())
}

/// Write an indented overview of a circuit and its modules.
pub fn write_summary<W: Write>(
    out: &mut W,
    circuit: &CircuitDefinition,
    depth: usize,
) -> io::Result<()> {
    let pad = "  ".repeat(depth);

    writeln!(out, "{pad}Circuit {}", style(circuit.name()).cyan().bold())?;
    writeln!(
        out,
        "{pad}  {} qubits, {} gates, {} measurements, {} classical bits",
        circuit.num_qubits(),
        circuit.num_gates(),
        circuit.num_measurements(),
        circuit.num_clbits()
    )?;

    if !circuit.classical_bits().is_empty() {
        let bits: Vec<_> = circuit
            .classical_bits()
            .iter()
            .map(|(name, id)| format!("{name}={}", id.0))
            .collect();
        writeln!(out, "{pad}  Classical bits: {}", bits.join(", "))?;
    }

    for line in circuit.control_flow() {
        writeln!(out, "{pad}  Control flow: {}", style(line).dim())?;
    }
    for line in circuit.error_correction() {
        writeln!(out, "{pad}  Error correction: {}", style(line).dim())?;
    }

    for (key, value) in circuit.hardware().iter() {
        match value {
            HardwareValue::Tokens(tokens) => {
                writeln!(
                    out,
                    "{pad}  Hardware {}: {}",
                    style(key).yellow(),
                    tokens.join(" ")
                )?;
            }
            HardwareValue::Connectivity(lines) => {
                writeln!(
                    out,
                    "{pad}  Hardware {}: {}",
                    style(key).yellow(),
                    lines.join(", ")
                )?;
            }
        }
    }

    for line in circuit.annotations() {
        writeln!(out, "{pad}  Annotation: {}", style(line).dim())?;
    }

    for (name, module) in circuit.modules().iter() {
        writeln!(out, "{pad}  Module {}:", style(name).magenta())?;
        write_summary(out, module, depth + 2)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use qadl_parser::parse;

    fn summary(source: &str) -> String {
        console::set_colors_enabled(false);
        let circuit = parse(source).unwrap();
        let mut out = Vec::new();
        write_summary(&mut out, &circuit, 0).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_counts() {
        let text = summary("Circuit Bell {\nqubit q0\nqubit q1\ngate H q0\ngate CNOT q0 q1\nmeasure q0 -> c0\n}");

        assert!(text.starts_with("Circuit Bell\n"));
        assert!(text.contains("2 qubits, 2 gates, 1 measurements, 1 classical bits"));
        assert!(text.contains("Classical bits: c0=0"));
    }

    #[test]
    fn test_summary_modules_and_hardware() {
        let text = summary(
            "Circuit Top {\nhardware {\nbackend aer\nqubit_connectivity\nq0-q1\n}\nmodule Sub {\nCircuit Inner {\nqubit q0\n}\n}\n}",
        );

        assert!(text.contains("Hardware backend: aer"));
        assert!(text.contains("Hardware qubit_connectivity: q0-q1"));
        assert!(text.contains("  Module Sub:\n    Circuit Inner\n"));
    }
}
