//! Line normalization.

/// A trimmed, non-comment line of a script with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'src> {
    /// Line number in the text being parsed.
    pub number: usize,
    /// Line content without surrounding whitespace.
    pub text: &'src str,
}

impl<'src> SourceLine<'src> {
    /// Create a source line.
    pub fn new(number: usize, text: &'src str) -> Self {
        Self { number, text }
    }

    /// `@...` metadata line.
    pub fn is_annotation(&self) -> bool {
        self.text.starts_with('@')
    }

    /// Line ends with `{`.
    pub fn opens_block(&self) -> bool {
        self.text.ends_with('{')
    }

    /// Line begins with `}`.
    pub fn closes_block(&self) -> bool {
        self.text.starts_with('}')
    }
}

/// Normalize script text into the lines the dispatcher sees.
///
/// Lines are trimmed and numbered from 1. Empty lines, `//` comments and
/// `/* ... */` comments are dropped; a block comment runs from the line that
/// starts with `/*` through the first line containing `*/`. Annotation lines
/// are kept so the dispatcher can record them.
pub fn normalize(source: &str) -> Vec<SourceLine<'_>> {
    let mut lines = Vec::new();
    let mut in_comment = false;

    for (idx, raw) in source.lines().enumerate() {
        let text = raw.trim();

        if in_comment {
            if text.contains("*/") {
                in_comment = false;
            }
            continue;
        }

        if text.is_empty() || text.starts_with("//") {
            continue;
        }

        if let Some(rest) = text.strip_prefix("/*") {
            in_comment = !rest.contains("*/");
            continue;
        }

        lines.push(SourceLine::new(idx + 1, text));
    }

    lines
}
