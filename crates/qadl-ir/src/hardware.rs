//! Target hardware configuration.

use serde::{Deserialize, Serialize};

use crate::map::NamedMap;

/// Reserved key whose value is a list of raw connectivity lines.
pub const QUBIT_CONNECTIVITY: &str = "qubit_connectivity";

/// Value of a single hardware setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum HardwareValue {
    /// Whitespace-separated tokens following the key, e.g. `backend ibmq_qasm_simulator`.
    Tokens(Vec<String>),
    /// Raw connectivity-description lines gathered for `qubit_connectivity`.
    Connectivity(Vec<String>),
}

impl HardwareValue {
    /// The stored strings, regardless of kind.
    pub fn values(&self) -> &[String] {
        match self {
            HardwareValue::Tokens(v) | HardwareValue::Connectivity(v) => v,
        }
    }
}

/// Hardware settings keyed by name, in first-definition order.
///
/// Several `hardware` blocks in one circuit are merged; a later block
/// overwrites keys set by an earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HardwareConfig {
    entries: NamedMap<HardwareValue>,
}

impl HardwareConfig {
    /// Create an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a token-list key.
    pub fn set_tokens<I, S>(&mut self, key: impl Into<String>, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens.into_iter().map(Into::into).collect();
        self.entries.insert(key, HardwareValue::Tokens(tokens));
    }

    /// Set the `qubit_connectivity` lines.
    pub fn set_connectivity<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines.into_iter().map(Into::into).collect();
        self.entries
            .insert(QUBIT_CONNECTIVITY, HardwareValue::Connectivity(lines));
    }

    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&HardwareValue> {
        self.entries.get(key)
    }

    /// Token list for a key, if it holds one.
    pub fn tokens(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key)? {
            HardwareValue::Tokens(v) => Some(v),
            HardwareValue::Connectivity(_) => None,
        }
    }

    /// Connectivity lines, if any were configured.
    pub fn connectivity(&self) -> Option<&[String]> {
        match self.entries.get(QUBIT_CONNECTIVITY)? {
            HardwareValue::Connectivity(v) => Some(v),
            HardwareValue::Tokens(_) => None,
        }
    }

    /// Merge another configuration into this one, later keys winning.
    pub fn merge(&mut self, other: HardwareConfig) {
        self.entries.merge(other.entries);
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key is set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over settings in first-definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HardwareValue)> {
        self.entries.iter()
    }
}
