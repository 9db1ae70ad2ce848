//! Line lexer for QADL.
//!
//! QADL is line oriented and whitespace separated. Each normalized line is
//! split into tokens here; reserved words and the `->`, `{`, `}` punctuation
//! get their own variants and everything else is a [`Token::Word`].

use logos::Logos;
use std::fmt;

use crate::error::{ParseError, ParseResult};
use crate::source::SourceLine;

/// Tokens of a single QADL line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
pub enum Token<'src> {
    // Keywords
    #[token("Circuit")]
    Circuit,

    #[token("qubit")]
    Qubit,

    #[token("gate")]
    Gate,

    #[token("measure")]
    Measure,

    #[token("error_correction")]
    ErrorCorrection,

    #[token("hardware")]
    Hardware,

    #[token("module")]
    Module,

    #[token("qubit_connectivity")]
    QubitConnectivity,

    // Punctuation
    #[token("->")]
    Arrow,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    /// Any other run of non-whitespace characters.
    #[regex(r"[^ \t\r\n\x0B\x0C]+", |lex| lex.slice(), priority = 1)]
    Word(&'src str),
}

impl<'src> Token<'src> {
    /// Source text of the token.
    pub fn as_str(&self) -> &'src str {
        match self {
            Token::Circuit => "Circuit",
            Token::Qubit => "qubit",
            Token::Gate => "gate",
            Token::Measure => "measure",
            Token::ErrorCorrection => "error_correction",
            Token::Hardware => "hardware",
            Token::Module => "module",
            Token::QubitConnectivity => "qubit_connectivity",
            Token::Arrow => "->",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Word(s) => s,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a line into tokens.
pub fn tokenize<'src>(line: &SourceLine<'src>) -> ParseResult<Vec<Token<'src>>> {
    let mut lexer = Token::lexer(line.text);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::UnrecognizedStatement {
                    line: line.number,
                    text: line.text.to_string(),
                });
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Vec<Token<'_>> {
        tokenize(&SourceLine::new(1, text)).unwrap()
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            lex("Circuit Teleport {"),
            [Token::Circuit, Token::Word("Teleport"), Token::LBrace]
        );
        assert_eq!(
            lex("measure q0 -> c0"),
            [
                Token::Measure,
                Token::Word("q0"),
                Token::Arrow,
                Token::Word("c0")
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_a_word() {
        assert_eq!(lex("qubits q0"), [Token::Word("qubits"), Token::Word("q0")]);
        assert_eq!(lex("gates"), [Token::Word("gates")]);
        assert_eq!(lex("qubit_connectivity"), [Token::QubitConnectivity]);
    }

    #[test]
    fn test_lone_braces() {
        assert_eq!(lex("{"), [Token::LBrace]);
        assert_eq!(lex("}"), [Token::RBrace]);
        assert_eq!(lex("} else {"), [Token::RBrace, Token::Word("else"), Token::LBrace]);
        assert_eq!(lex("->"), [Token::Arrow]);
    }

    #[test]
    fn test_glued_punctuation_stays_in_word() {
        assert_eq!(lex("q0->c0"), [Token::Word("q0->c0")]);
        assert_eq!(lex("Sub{"), [Token::Word("Sub{")]);
        assert_eq!(lex("q0-q1"), [Token::Word("q0-q1")]);
    }

    #[test]
    fn test_as_str_round_trips_words() {
        let tokens = lex("gate CNOT   q0\tq1");
        let text: Vec<_> = tokens.iter().map(Token::as_str).collect();
        assert_eq!(text, ["gate", "CNOT", "q0", "q1"]);
    }
}
