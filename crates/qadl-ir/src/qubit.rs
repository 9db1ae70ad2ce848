//! Qubit declarations and index types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// Dense index of a qubit, assigned in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QubitId(pub u32);

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

impl TryFrom<usize> for QubitId {
    type Error = IrError;

    fn try_from(id: usize) -> IrResult<Self> {
        u32::try_from(id)
            .map(QubitId)
            .map_err(|_| IrError::CapacityExceeded {
                what: "qubits",
                count: id,
            })
    }
}

/// Dense index of a classical bit, assigned in first-mention order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClbitId(pub u32);

impl fmt::Display for ClbitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<u32> for ClbitId {
    fn from(id: u32) -> Self {
        ClbitId(id)
    }
}

impl TryFrom<usize> for ClbitId {
    type Error = IrError;

    fn try_from(id: usize) -> IrResult<Self> {
        u32::try_from(id)
            .map(ClbitId)
            .map_err(|_| IrError::CapacityExceeded {
                what: "classical bits",
                count: id,
            })
    }
}

/// A named logical qubit, as declared by `qubit <name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Qubit {
    name: String,
}

impl Qubit {
    /// Create a qubit with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The declared name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", QubitId(3)), "q3");
        assert_eq!(format!("{}", ClbitId(0)), "c0");
    }

    #[test]
    fn test_id_from_usize() {
        assert_eq!(QubitId::try_from(7_usize).unwrap(), QubitId(7));
        assert_eq!(ClbitId::try_from(2_usize).unwrap(), ClbitId(2));
    }

    #[test]
    fn test_qubit_display_is_name() {
        let q = Qubit::new("ancilla");
        assert_eq!(q.name(), "ancilla");
        assert_eq!(format!("{q}"), "ancilla");
    }
}
