//! Brace-delimited block extraction.
//!
//! `hardware` and `module` headers end with `{`; their bodies run until the
//! matching `}`. Depth starts at 1 after the header. A line beginning with
//! `}` lowers it and a line ending with `{` raises it, so `} else {` leaves it
//! unchanged.

use crate::source::SourceLine;

/// Lines of a block and where scanning resumes after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a, 'src> {
    /// Lines strictly between the header and the closing line.
    pub body: &'a [SourceLine<'src>],
    /// The closing line, `None` if input ran out first.
    pub close: Option<SourceLine<'src>>,
    /// Index of the first line after the block.
    pub resume: usize,
}

impl Block<'_, '_> {
    /// Whether a matching closing line was found.
    pub fn is_terminated(&self) -> bool {
        self.close.is_some()
    }
}

/// Extract the block starting at `start`, closing it at end of input if needed.
pub fn extract_block<'a, 'src>(lines: &'a [SourceLine<'src>], start: usize) -> Block<'a, 'src> {
    let start = start.min(lines.len());
    let mut depth = 1_usize;

    for (idx, line) in lines.iter().enumerate().skip(start) {
        if line.closes_block() {
            depth -= 1;
            if depth == 0 {
                return Block {
                    body: &lines[start..idx],
                    close: Some(*line),
                    resume: idx + 1,
                };
            }
        }
        if line.opens_block() {
            depth += 1;
        }
    }

    Block {
        body: &lines[start..],
        close: None,
        resume: lines.len(),
    }
}

/// Extract the block starting at `start`, or `None` if it is never closed.
pub fn try_extract_block<'a, 'src>(
    lines: &'a [SourceLine<'src>],
    start: usize,
) -> Option<Block<'a, 'src>> {
    let block = extract_block(lines, start);
    block.is_terminated().then_some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::normalize;

    #[test]
    fn test_flat_block() {
        let lines = normalize("hardware {\nbackend aer\nshots 10\n}\nqubit q0");
        let block = extract_block(&lines, 1);

        let body: Vec<_> = block.body.iter().map(|l| l.text).collect();
        assert_eq!(body, ["backend aer", "shots 10"]);
        assert_eq!(block.close.unwrap().number, 4);
        assert_eq!(block.resume, 4);
        assert_eq!(lines[block.resume].text, "qubit q0");
    }

    #[test]
    fn test_nested_braces() {
        let source = "module Sub {\nCircuit Inner {\nif (c0 == 1) {\ngate X q0\n} else {\ngate Z q0\n}\n}\n}\ngate H q1";
        let lines = normalize(source);
        let block = extract_block(&lines, 1);

        assert_eq!(block.body.len(), 7);
        assert_eq!(block.body[0].text, "Circuit Inner {");
        assert_eq!(block.body[6].text, "}");
        assert_eq!(block.close.unwrap().number, 9);
        assert_eq!(lines[block.resume].text, "gate H q1");
    }

    #[test]
    fn test_unterminated_closes_at_end() {
        let lines = normalize("module Sub {\nCircuit Inner {\nqubit q0\n}");
        let block = extract_block(&lines, 1);

        assert!(!block.is_terminated());
        assert_eq!(block.body.len(), 3);
        assert_eq!(block.resume, lines.len());
        assert!(try_extract_block(&lines, 1).is_none());
    }

    #[test]
    fn test_empty_block() {
        let lines = normalize("hardware {\n}");
        let block = try_extract_block(&lines, 1).unwrap();
        assert!(block.body.is_empty());
        assert_eq!(block.resume, 2);
    }

    #[test]
    fn test_header_on_last_line() {
        let lines = normalize("hardware {");
        let block = extract_block(&lines, 1);
        assert!(block.body.is_empty());
        assert!(!block.is_terminated());
        assert_eq!(block.resume, 1);
    }
}
