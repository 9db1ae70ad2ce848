//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when resolving or rebuilding circuit definitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operand names a qubit that was never declared.
    #[error("Qubit '{name}' not declared in circuit{}", format_gate_context(.gate_name))]
    UnknownQubit {
        /// The undeclared qubit name.
        name: String,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Classical bit name missing from the index mapping.
    #[error("Classical bit '{0}' has no index in circuit")]
    UnknownClbit(String),

    /// More qubits or bits than an index can address.
    #[error("Too many {what}: {count} exceeds u32::MAX")]
    CapacityExceeded {
        /// What overflowed ("qubits" or "classical bits").
        what: &'static str,
        /// Number of entries requested.
        count: usize,
    },

    /// A deserialized classical-bit mapping is not dense in first-mention order.
    #[error("Invalid classical bit mapping: {0}")]
    InvalidClbitMap(String),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
