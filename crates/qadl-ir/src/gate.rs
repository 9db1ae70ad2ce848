//! Gate applications and measurements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named gate applied to an ordered list of qubit names.
///
/// Operands are kept exactly as written in the script. The expected arity of
/// a gate name is not checked here; execution tooling decides what `CNOT` or
/// `InverseQFT` accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    name: String,
    operands: Vec<String>,
}

impl Gate {
    /// Create a gate application.
    pub fn new<I, S>(name: impl Into<String>, operands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// Gate name as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Operand qubit names in order.
    pub fn operands(&self) -> &[String] {
        &self.operands
    }

    /// Number of operands.
    pub fn arity(&self) -> usize {
        self.operands.len()
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.operands.join(" "))
    }
}

/// A measurement of a qubit into a named classical bit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    qubit: String,
    classical_bit: String,
}

impl Measurement {
    /// Create a measurement `qubit -> classical_bit`.
    pub fn new(qubit: impl Into<String>, classical_bit: impl Into<String>) -> Self {
        Self {
            qubit: qubit.into(),
            classical_bit: classical_bit.into(),
        }
    }

    /// Measured qubit name.
    pub fn qubit(&self) -> &str {
        &self.qubit
    }

    /// Target classical-bit name.
    pub fn classical_bit(&self) -> &str {
        &self.classical_bit
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.qubit, self.classical_bit)
    }
}
