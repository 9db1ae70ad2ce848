//! QADL Parser
//!
//! This crate turns QADL (Quantum Algorithm Description Language) scripts into
//! [`qadl_ir::CircuitDefinition`] values.
//!
//! QADL is line oriented: one statement per line, braces closing blocks.
//! Inside a circuit the first line beginning with `}` closes it. Control-flow
//! lines are recorded as text and do not open a body of their own.
//!
//! | Statement | Example |
//! |-----------|---------|
//! | Circuit header | `Circuit Teleport {` |
//! | Qubit declaration | `qubit q0` |
//! | Gate application | `gate CNOT q0 q1` |
//! | Measurement | `measure q0 -> c0` |
//! | Control flow (kept verbatim) | `if (c0 == 1) {` |
//! | Error correction (kept verbatim) | `error_correction surface_code 3` |
//! | Hardware block | `hardware { backend aer }` |
//! | Module | `module Oracle { Circuit Oracle { ... } }` |
//! | Annotation | `@author alice` |
//! | Comments | `// line`, `/* block */` |
//!
//! # Pipeline
//!
//! 1. [`normalize`] trims lines and drops comments, keeping line numbers.
//! 2. [`classify`] lexes a line and names its [`Statement`].
//! 3. The dispatcher applies statements to the open circuit, using
//!    [`extract_block`] for `hardware` and `module` blocks and parsing each
//!    module's text recursively.
//!
//! # Example
//!
//! ```rust
//! use qadl_parser::parse;
//!
//! let script = r#"
//!     Circuit Bell {
//!         qubit q0
//!         qubit q1
//!         gate H q0
//!         gate CNOT q0 q1
//!         measure q0 -> c0
//!         measure q1 -> c1
//!     }
//! "#;
//!
//! let circuit = parse(script).unwrap();
//! assert_eq!(circuit.name(), "Bell");
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_clbits(), 2);
//! ```
//!
//! # Example: Errors
//!
//! ```rust
//! use qadl_parser::{ParseError, parse};
//!
//! let err = parse("Circuit A {\n  qubits q0\n}").unwrap_err();
//! assert!(matches!(err, ParseError::UnrecognizedStatement { line: 2, .. }));
//! assert_eq!(
//!     err.to_string(),
//!     "Syntax error on line 2: Unrecognized statement 'qubits q0'"
//! );
//! ```
//!
//! # Example: Strict Blocks
//!
//! ```rust
//! use qadl_parser::{ParseError, ParseOptions, parse, parse_with};
//!
//! let script = "Circuit A {\n  hardware {\n    backend aer\n";
//! assert!(parse(script).is_ok());
//!
//! let err = parse_with(script, &ParseOptions::strict()).unwrap_err();
//! assert!(matches!(err, ParseError::UnterminatedBlock { line: 2, .. }));
//! ```

pub mod block;
pub mod error;
pub mod lexer;
pub mod options;
mod parser;
pub mod source;

pub use block::{Block, extract_block, try_extract_block};
pub use error::{ParseError, ParseResult};
pub use lexer::{Token, tokenize};
pub use options::{BlockPolicy, ParseOptions};
pub use parser::{Statement, classify, is_control_flow, parse, parse_with};
pub use source::{SourceLine, normalize};
