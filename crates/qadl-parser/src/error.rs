//! Error types for the QADL parser.

use qadl_ir::IrError;
use thiserror::Error;

/// Errors that can occur during parsing.
///
/// Every parse either returns a complete definition or stops at the first
/// error in line order. Line numbers are 1-based and relative to the text
/// that was parsed; inside a module that is the module's own block.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Circuit, module or hardware header with the wrong shape.
    #[error("Syntax error on line {line}: {message}")]
    MalformedHeader { line: usize, message: String },

    /// Statement with a wrong token count or a missing literal token.
    #[error("Syntax error on line {line}: {message}")]
    MalformedStatement { line: usize, message: String },

    /// Line that matches no known statement shape.
    #[error("Syntax error on line {line}: Unrecognized statement '{text}'")]
    UnrecognizedStatement { line: usize, text: String },

    /// Input ended without a circuit header.
    #[error("No valid circuit found in the script")]
    MissingCircuit,

    /// Failure inside a module block.
    #[error("In module '{module}' (declared on line {header_line}): {source}")]
    NestedParseFailure {
        module: String,
        header_line: usize,
        source: Box<ParseError>,
    },

    /// Block without a closing brace, under the strict block policy.
    #[error("Syntax error on line {line}: '{header}' block is never closed")]
    UnterminatedBlock { line: usize, header: String },

    /// IR error during circuit construction.
    #[error("Circuit error: {0}")]
    CircuitError(#[from] IrError),
}

impl ParseError {
    /// Line of the failure, relative to the innermost text that was parsed.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedHeader { line, .. }
            | ParseError::MalformedStatement { line, .. }
            | ParseError::UnrecognizedStatement { line, .. }
            | ParseError::UnterminatedBlock { line, .. } => Some(*line),
            ParseError::NestedParseFailure { source, .. } => source.line(),
            ParseError::MissingCircuit | ParseError::CircuitError(_) => None,
        }
    }

    /// Line of the failure counted in the top-level script.
    pub fn absolute_line(&self) -> Option<usize> {
        match self {
            ParseError::NestedParseFailure {
                header_line,
                source,
                ..
            } => source.absolute_line().map(|inner| header_line + inner),
            other => other.line(),
        }
    }

    /// Names of the modules enclosing the failure, outermost first.
    pub fn module_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let ParseError::NestedParseFailure { module, source, .. } = current {
            path.push(module.as_str());
            current = source;
        }
        path
    }

    /// The error that started it all, below any module nesting.
    pub fn innermost(&self) -> &ParseError {
        match self {
            ParseError::NestedParseFailure { source, .. } => source.innermost(),
            other => other,
        }
    }
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;
