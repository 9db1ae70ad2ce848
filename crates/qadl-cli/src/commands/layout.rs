//! Layout command implementation.

use anyhow::{Context, Result};
use console::style;
use qadl_ir::{CircuitDefinition, ResolvedCircuit};
use qadl_parser::ParseOptions;

use super::common::load_circuit;

/// Execute the layout command.
pub fn execute(input: &str, options: &ParseOptions) -> Result<()> {
    let circuit = load_circuit(input, options)?;

    for line in layout_lines(&circuit, "")? {
        println!("{line}");
    }

    Ok(())
}

/// Describe the index layout of a circuit and, recursively, its modules.
///
/// `path` is the module path leading to `circuit`, empty for the top level.
pub fn layout_lines(circuit: &CircuitDefinition, path: &str) -> Result<Vec<String>> {
    let resolved = ResolvedCircuit::from_definition(circuit)
        .with_context(|| format!("Cannot resolve circuit '{}'", circuit.name()))?;
    let layout = circuit.layout()?;

    let title = if path.is_empty() {
        format!("Circuit {}", circuit.name())
    } else {
        format!("Module {path} (circuit {})", circuit.name())
    };

    let mut lines = vec![
        style(title).cyan().bold().to_string(),
        format!(
            "  registers: {} qubits, {} classical bits",
            resolved.num_qubits, resolved.num_clbits
        ),
    ];

    for qubit in circuit.qubits() {
        if let Some(id) = layout.qubit(qubit.name()) {
            lines.push(format!("  qubit {} -> {}", qubit.name(), id.0));
        }
    }
    for (name, id) in circuit.classical_bits().iter() {
        lines.push(format!("  clbit {name} -> {}", id.0));
    }
    for gate in &resolved.gates {
        let qubits: Vec<_> = gate.qubits.iter().map(|q| q.0.to_string()).collect();
        lines.push(format!("  gate {} [{}]", gate.name, qubits.join(", ")));
    }
    for m in &resolved.measurements {
        lines.push(format!("  measure {} -> {}", m.qubit.0, m.clbit.0));
    }

    for (name, module) in circuit.modules().iter() {
        let module_path = if path.is_empty() {
            name.to_string()
        } else {
            format!("{path}/{name}")
        };
        lines.extend(layout_lines(module, &module_path)?);
    }

    Ok(lines)
}
