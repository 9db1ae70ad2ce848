//! Hardware block entries.

use qadl_ir::{HardwareConfig, QUBIT_CONNECTIVITY};
use tracing::trace;

use super::statement::malformed_statement;
use crate::block::extract_block;
use crate::error::ParseResult;
use crate::lexer::{Token, tokenize};
use crate::source::SourceLine;

/// Lines that only open or close a nested section.
fn is_structural(line: &SourceLine<'_>) -> bool {
    line.text == "{" || line.text == "}"
}

/// Parse the body of a `hardware { ... }` block.
///
/// Every entry is `KEY VALUE...`. `qubit_connectivity` instead collects raw
/// lines: the text after the keyword, then either its own braced section or
/// the rest of the block.
pub(super) fn parse_entries(body: &[SourceLine<'_>]) -> ParseResult<HardwareConfig> {
    let mut config = HardwareConfig::new();
    let mut idx = 0;

    while let Some(line) = body.get(idx) {
        idx += 1;
        if is_structural(line) {
            continue;
        }

        let mut tokens = tokenize(line)?;
        if tokens.last() == Some(&Token::LBrace) {
            tokens.pop();
        }

        match tokens.as_slice() {
            [Token::QubitConnectivity, ..] => {
                let mut entries = Vec::new();
                let inline = line.text[QUBIT_CONNECTIVITY.len()..]
                    .trim()
                    .trim_end_matches('{')
                    .trim_end();
                if !inline.is_empty() {
                    entries.push(inline.to_string());
                }

                let rest = if line.opens_block() {
                    let section = extract_block(body, idx);
                    idx = section.resume;
                    section.body
                } else {
                    let rest = &body[idx..];
                    idx = body.len();
                    rest
                };
                entries.extend(
                    rest.iter()
                        .filter(|l| !is_structural(l))
                        .map(|l| l.text.to_string()),
                );

                trace!(line = line.number, entries = entries.len(), "qubit connectivity");
                config.set_connectivity(entries);
            }
            [key, values @ ..] if !values.is_empty() => {
                trace!(line = line.number, key = key.as_str(), "hardware entry");
                config.set_tokens(key.as_str(), values.iter().map(Token::as_str));
            }
            _ => {
                return Err(malformed_statement(line, "Invalid hardware configuration."));
            }
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::source::normalize;

    fn entries(source: &str) -> ParseResult<HardwareConfig> {
        parse_entries(&normalize(source))
    }

    #[test]
    fn test_key_values() {
        let config = entries("backend ibmq_qasm_simulator\nshots 1024 2048").unwrap();
        assert_eq!(
            config.tokens("backend").unwrap(),
            ["ibmq_qasm_simulator".to_string()]
        );
        assert_eq!(config.tokens("shots").unwrap(), ["1024", "2048"]);
        assert!(config.connectivity().is_none());
    }

    #[test]
    fn test_connectivity_takes_rest_of_block() {
        let config = entries("backend aer\nqubit_connectivity\nq0-q1\nq1-q2").unwrap();
        assert_eq!(config.connectivity().unwrap(), ["q0-q1", "q1-q2"]);
        assert_eq!(config.len(), 2);
    }

    #[test]
    fn test_connectivity_inline_and_braced() {
        let config =
            entries("qubit_connectivity linear {\nq0-q1\nq1-q2\n}\nshots 100").unwrap();
        assert_eq!(config.connectivity().unwrap(), ["linear", "q0-q1", "q1-q2"]);
        assert_eq!(config.tokens("shots").unwrap(), ["100"]);
    }

    #[test]
    fn test_brace_lines_are_skipped() {
        let err = entries("{\nbackend aer\n}\nnoise_model {\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedStatement { line: 4, .. }));

        let config = entries("{\nbackend aer\n}").unwrap();
        assert_eq!(config.tokens("backend").unwrap(), ["aer"]);
    }

    #[test]
    fn test_single_token_entry() {
        let err = entries("backend aer\nshots").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedStatement {
                line: 2,
                message: "Invalid hardware configuration.".into()
            }
        );
    }

    #[test]
    fn test_later_key_wins() {
        let config = entries("shots 10\nshots 20").unwrap();
        assert_eq!(config.tokens("shots").unwrap(), ["20"]);
        assert_eq!(config.len(), 1);
    }
}
