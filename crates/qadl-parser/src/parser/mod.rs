//! Statement dispatcher and circuit builder.

mod hardware;
mod statement;

pub use statement::{Statement, classify, is_control_flow};

use qadl_ir::{CircuitDefinition, Gate, HardwareConfig, Measurement, Qubit};
use tracing::{debug, instrument, trace, warn};

use crate::block::{Block, extract_block};
use crate::error::{ParseError, ParseResult};
use crate::options::ParseOptions;
use crate::source::{SourceLine, normalize};
use statement::{classify_header, malformed_header};

/// Parse a QADL script with the default options.
pub fn parse(source: &str) -> ParseResult<CircuitDefinition> {
    parse_with(source, &ParseOptions::default())
}

/// Parse a QADL script.
///
/// Lines before the `Circuit <name> {` header may only be annotations, and
/// everything after the circuit's closing `}` is ignored.
#[instrument(level = "debug", skip_all, fields(bytes = source.len(), strict = options.is_strict()))]
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseResult<CircuitDefinition> {
    let circuit = Parser::new(source, options).parse()?;
    debug!(
        circuit = circuit.name(),
        gates = circuit.total_gate_count(),
        modules = circuit.modules().len(),
        "parsed"
    );
    Ok(circuit)
}

/// State of one parse. Module blocks get a parser of their own.
struct Parser<'a, 'src> {
    /// Unprocessed source lines, for slicing module text.
    raw: Vec<&'src str>,
    lines: Vec<SourceLine<'src>>,
    pos: usize,
    options: &'a ParseOptions,
}

impl<'a, 'src> Parser<'a, 'src> {
    fn new(source: &'src str, options: &'a ParseOptions) -> Self {
        Self {
            raw: source.lines().collect(),
            lines: normalize(source),
            pos: 0,
            options,
        }
    }

    fn next_line(&mut self) -> Option<SourceLine<'src>> {
        let line = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some(line)
    }

    fn parse(mut self) -> ParseResult<CircuitDefinition> {
        let name = self.seek()?;
        let mut circuit = CircuitDefinition::new(name);
        self.fill(&mut circuit)?;
        Ok(circuit)
    }

    /// Skip to the circuit header.
    fn seek(&mut self) -> ParseResult<&'src str> {
        while let Some(line) = self.next_line() {
            if let Some(name) = classify_header(&line)? {
                debug!(circuit = name, line = line.number, "circuit opened");
                return Ok(name);
            }
        }
        Err(ParseError::MissingCircuit)
    }

    /// Apply statements until the circuit closes or input runs out.
    fn fill(&mut self, circuit: &mut CircuitDefinition) -> ParseResult<()> {
        while let Some(line) = self.next_line() {
            let statement = classify(&line)?;
            trace!(line = line.number, kind = statement.kind(), "statement");

            match statement {
                Statement::CircuitHeader { .. } => {
                    return Err(malformed_header(
                        &line,
                        "Circuit already open. Nested circuits must be declared with 'module <name> {'",
                    ));
                }
                Statement::Qubit { name } => {
                    circuit.add_qubit(Qubit::new(name));
                }
                Statement::Gate { name, operands } => {
                    circuit.add_gate(Gate::new(name, operands));
                }
                Statement::Measure { qubit, bit } => {
                    circuit.add_measurement(Measurement::new(qubit, bit))?;
                }
                Statement::ControlFlow(text) => {
                    circuit.add_control_flow(text);
                }
                Statement::ErrorCorrection(text) => {
                    circuit.add_error_correction(text);
                }
                Statement::HardwareHeader { inline_brace } => {
                    let config = self.hardware_block(&line, inline_brace)?;
                    circuit.merge_hardware(config);
                }
                Statement::ModuleHeader { name } => {
                    let module = self.module_block(&line, name)?;
                    circuit.add_module(name, module);
                }
                Statement::Close => {
                    debug!(circuit = circuit.name(), line = line.number, "circuit closed");
                    return Ok(());
                }
                Statement::Annotation(text) => {
                    circuit.add_annotation(text);
                }
            }
        }

        warn!(circuit = circuit.name(), "input ended before circuit was closed");
        Ok(())
    }

    /// Extract the block starting at `start`, applying the block policy.
    fn block(&self, header: &SourceLine<'src>, start: usize) -> ParseResult<Block<'_, 'src>> {
        let block = extract_block(&self.lines, start);
        match block.close {
            Some(close) => {
                debug!(
                    header = header.number,
                    close = close.number,
                    lines = block.body.len(),
                    "block extracted"
                );
            }
            None if self.options.is_strict() => {
                return Err(ParseError::UnterminatedBlock {
                    line: header.number,
                    header: header.text.to_string(),
                });
            }
            None => {
                warn!(
                    line = header.number,
                    header = header.text,
                    "block never closed, closing at end of input"
                );
            }
        }
        Ok(block)
    }

    fn hardware_block(
        &mut self,
        header: &SourceLine<'src>,
        inline_brace: bool,
    ) -> ParseResult<HardwareConfig> {
        let start = if inline_brace {
            self.pos
        } else {
            match self.lines.get(self.pos) {
                Some(next) if next.text == "{" => self.pos + 1,
                _ => {
                    return Err(malformed_header(
                        header,
                        "Invalid hardware declaration. Expected 'hardware {'",
                    ));
                }
            }
        };

        let (config, resume) = {
            let block = self.block(header, start)?;
            (hardware::parse_entries(block.body)?, block.resume)
        };
        self.pos = resume;
        Ok(config)
    }

    /// Parse a module block as a script of its own.
    ///
    /// The module text is the raw source between the header and the closing
    /// line, so line 1 of the module is the line after its header.
    fn module_block(
        &mut self,
        header: &SourceLine<'src>,
        name: &str,
    ) -> ParseResult<CircuitDefinition> {
        let (text, resume) = {
            let block = self.block(header, self.pos)?;
            let end = block.close.map_or(self.raw.len(), |close| close.number - 1);
            let text = self
                .raw
                .get(header.number..end)
                .unwrap_or_default()
                .join("\n");
            (text, block.resume)
        };
        self.pos = resume;

        debug!(module = name, line = header.number, "entering module");
        let module = Parser::new(&text, self.options).parse().map_err(|source| {
            ParseError::NestedParseFailure {
                module: name.to_string(),
                header_line: header.number,
                source: Box::new(source),
            }
        })?;
        debug!(module = name, circuit = module.name(), "module parsed");

        Ok(module)
    }
}
