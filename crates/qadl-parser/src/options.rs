//! Parse options.

use serde::{Deserialize, Serialize};

/// What to do when input ends inside a `{ ... }` block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockPolicy {
    /// Treat end of input as the closing brace.
    #[default]
    Lenient,
    /// Fail with [`ParseError::UnterminatedBlock`](crate::ParseError::UnterminatedBlock).
    Strict,
}

/// Options for [`parse_with`](crate::parse_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Handling of blocks that are never closed.
    pub unterminated_blocks: BlockPolicy,
}

impl ParseOptions {
    /// Options that reject unterminated blocks.
    pub fn strict() -> Self {
        Self {
            unterminated_blocks: BlockPolicy::Strict,
        }
    }

    /// Options that close unterminated blocks at end of input.
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Whether unterminated blocks are an error.
    pub fn is_strict(&self) -> bool {
        self.unterminated_blocks == BlockPolicy::Strict
    }
}
