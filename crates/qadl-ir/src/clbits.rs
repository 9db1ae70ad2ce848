//! Classical-bit index allocation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{IrError, IrResult};
use crate::map::NamedMap;
use crate::qubit::ClbitId;

/// Mapping from classical-bit names to dense indices.
///
/// Indices are handed out in first-mention order: the first name seen gets
/// `c0`, the next new name `c1`, and so on. A name keeps its index for the
/// lifetime of the mapping and no index is ever given to two names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassicalBits {
    bits: NamedMap<ClbitId>,
}

impl ClassicalBits {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `name`, allocating the next one on first mention.
    pub fn allocate(&mut self, name: &str) -> IrResult<ClbitId> {
        if let Some(&id) = self.bits.get(name) {
            return Ok(id);
        }
        let id = ClbitId::try_from(self.bits.len())?;
        self.bits.insert(name, id);
        Ok(id)
    }

    /// Index of an already-mentioned name.
    pub fn get(&self, name: &str) -> Option<ClbitId> {
        self.bits.get(name).copied()
    }

    /// Number of distinct classical bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if no classical bit has been mentioned.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate over `(name, index)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ClbitId)> {
        self.bits.iter().map(|(name, &id)| (name, id))
    }

    /// Names in allocation order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bits.keys()
    }
}

impl TryFrom<NamedMap<ClbitId>> for ClassicalBits {
    type Error = IrError;

    fn try_from(bits: NamedMap<ClbitId>) -> IrResult<Self> {
        for (pos, (name, id)) in bits.iter().enumerate() {
            if usize::try_from(id.0).ok() != Some(pos) {
                return Err(IrError::InvalidClbitMap(format!(
                    "'{name}' has index {} but is mention #{pos}",
                    id.0
                )));
            }
        }
        Ok(Self { bits })
    }
}

impl Serialize for ClassicalBits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bits.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ClassicalBits {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bits = NamedMap::<ClbitId>::deserialize(deserializer)?;
        Self::try_from(bits).map_err(serde::de::Error::custom)
    }
}
