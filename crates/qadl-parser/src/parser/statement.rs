//! Line classification.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, tokenize};
use crate::source::SourceLine;

/// `if (...) {` or `while (...) {` at the start of a line.
static CONTROL_FLOW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:if\s*\(.*\)\s*\{|\s*while\s*\(.*\)\s*\{)").expect("valid control flow pattern")
});

/// A classified QADL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement<'src> {
    /// `Circuit <name> {`
    CircuitHeader { name: &'src str },
    /// `qubit <name>`
    Qubit { name: &'src str },
    /// `gate <name> <operand>...`
    Gate {
        name: &'src str,
        operands: Vec<&'src str>,
    },
    /// `measure <qubit> -> <bit>`
    Measure { qubit: &'src str, bit: &'src str },
    /// `if (...) {` or `while (...) {`, kept verbatim.
    ControlFlow(&'src str),
    /// `error_correction <technique> ...`, kept verbatim.
    ErrorCorrection(&'src str),
    /// `hardware {`, or a bare `hardware` whose brace is on the next line.
    HardwareHeader { inline_brace: bool },
    /// `module <name> {`
    ModuleHeader { name: &'src str },
    /// A line beginning with `}`.
    Close,
    /// `@...`, kept verbatim.
    Annotation(&'src str),
}

impl Statement<'_> {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::CircuitHeader { .. } => "circuit",
            Statement::Qubit { .. } => "qubit",
            Statement::Gate { .. } => "gate",
            Statement::Measure { .. } => "measure",
            Statement::ControlFlow(_) => "control_flow",
            Statement::ErrorCorrection(_) => "error_correction",
            Statement::HardwareHeader { .. } => "hardware",
            Statement::ModuleHeader { .. } => "module",
            Statement::Close => "close",
            Statement::Annotation(_) => "annotation",
        }
    }
}

/// Whether a line has the `if (...) {` / `while (...) {` shape.
pub fn is_control_flow(text: &str) -> bool {
    CONTROL_FLOW.is_match(text)
}

/// Classify a normalized line, first matching shape wins.
///
/// Keywords match on the whole first token, so `qubits q0` is unrecognized
/// rather than a qubit declaration.
pub fn classify<'src>(line: &SourceLine<'src>) -> ParseResult<Statement<'src>> {
    let tokens = tokenize(line)?;

    match tokens.as_slice() {
        [Token::Circuit, rest @ ..] => match rest {
            [name, Token::LBrace] => Ok(Statement::CircuitHeader {
                name: name.as_str(),
            }),
            _ => Err(malformed_header(
                line,
                "Invalid circuit declaration. Expected 'Circuit <name> {'",
            )),
        },
        [Token::Qubit, rest @ ..] => match rest {
            [name] => Ok(Statement::Qubit {
                name: name.as_str(),
            }),
            _ => Err(malformed_statement(
                line,
                "Invalid qubit declaration. Expected 'qubit <name>'",
            )),
        },
        [Token::Gate, rest @ ..] => match rest {
            [name, operands @ ..] if !operands.is_empty() => Ok(Statement::Gate {
                name: name.as_str(),
                operands: operands.iter().map(Token::as_str).collect(),
            }),
            _ => Err(malformed_statement(
                line,
                "Invalid gate declaration. Expected 'gate <name> <qubits...>'",
            )),
        },
        [Token::Measure, rest @ ..] => match rest {
            [qubit, Token::Arrow, bit] => Ok(Statement::Measure {
                qubit: qubit.as_str(),
                bit: bit.as_str(),
            }),
            _ => Err(malformed_statement(
                line,
                "Invalid measurement declaration. Expected 'measure <qubit> -> <classical_bit>'",
            )),
        },
        _ if is_control_flow(line.text) => Ok(Statement::ControlFlow(line.text)),
        [Token::ErrorCorrection, rest @ ..] => {
            if rest.is_empty() {
                Err(malformed_statement(
                    line,
                    "Invalid error correction declaration. Expected 'error_correction <technique> <parameters>'",
                ))
            } else {
                Ok(Statement::ErrorCorrection(line.text))
            }
        }
        [Token::Hardware, rest @ ..] => match rest {
            [Token::LBrace] => Ok(Statement::HardwareHeader { inline_brace: true }),
            [] => Ok(Statement::HardwareHeader {
                inline_brace: false,
            }),
            _ => Err(malformed_header(
                line,
                "Invalid hardware declaration. Expected 'hardware {'",
            )),
        },
        [Token::Module, rest @ ..] => match rest {
            [name, Token::LBrace] => Ok(Statement::ModuleHeader {
                name: name.as_str(),
            }),
            _ => Err(malformed_header(
                line,
                "Invalid module declaration. Expected 'module <name> {'",
            )),
        },
        _ if line.closes_block() => Ok(Statement::Close),
        _ if line.is_annotation() => Ok(Statement::Annotation(line.text)),
        _ => Err(unrecognized(line)),
    }
}

/// Classify a line seen before any circuit is open.
///
/// Only a circuit header is accepted; annotations yield `None`.
pub(crate) fn classify_header<'src>(line: &SourceLine<'src>) -> ParseResult<Option<&'src str>> {
    if line.is_annotation() {
        return Ok(None);
    }
    match tokenize(line)?.first() {
        Some(Token::Circuit) => match classify(line)? {
            Statement::CircuitHeader { name } => Ok(Some(name)),
            _ => Err(unrecognized(line)),
        },
        _ => Err(unrecognized(line)),
    }
}

pub(crate) fn malformed_header(line: &SourceLine<'_>, message: &str) -> ParseError {
    ParseError::MalformedHeader {
        line: line.number,
        message: message.to_string(),
    }
}

pub(crate) fn malformed_statement(line: &SourceLine<'_>, message: &str) -> ParseError {
    ParseError::MalformedStatement {
        line: line.number,
        message: message.to_string(),
    }
}

fn unrecognized(line: &SourceLine<'_>) -> ParseError {
    ParseError::UnrecognizedStatement {
        line: line.number,
        text: line.text.to_string(),
    }
}
