//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qadl_ir::CircuitDefinition;
use qadl_parser::{ParseError, ParseOptions, parse_with};
use tracing::info;

/// Read a script from disk.
pub fn load_source(path: &str) -> Result<String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !ext.eq_ignore_ascii_case("qadl") {
        info!(path, "input does not have a .qadl extension");
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
}

/// Load and parse a script.
pub fn load_circuit(path: &str, options: &ParseOptions) -> Result<CircuitDefinition> {
    let source = load_source(path)?;
    parse_with(&source, options).map_err(|e| anyhow::anyhow!(describe_error(path, &e)))
}

/// Render a parse error with the file position of the failing line.
pub fn describe_error(path: &str, err: &ParseError) -> String {
    match err.absolute_line() {
        Some(line) => format!("{path}:{line}: {err}"),
        None => format!("{path}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn script(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".qadl").tempfile().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_circuit() {
        let file = script("Circuit A {\nqubit q0\n}\n");
        let path = file.path().to_str().unwrap();

        let circuit = load_circuit(path, &ParseOptions::default()).unwrap();
        assert_eq!(circuit.name(), "A");
    }

    #[test]
    fn test_missing_file() {
        let err = load_circuit("/nonexistent/script.qadl", &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with("File not found"));
    }

    #[test]
    fn test_error_has_file_position() {
        let file = script("Circuit A {\nmodule M {\nCircuit B {\nqubit\n}\n}\n}\n");
        let path = file.path().to_str().unwrap();

        let err = load_circuit(path, &ParseOptions::default()).unwrap_err();
        assert!(err.to_string().starts_with(&format!("{path}:4: ")), "{err}");
    }
}
