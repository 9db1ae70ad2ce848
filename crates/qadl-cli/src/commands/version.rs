//! Version command implementation.

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use qadl_parser::BlockPolicy;

use crate::config::Config;

/// Execute the version command.
pub fn execute(config: &Config) -> Result<()> {
    let stdout = io::stdout();
    write_version(&mut stdout.lock(), config)?;
    Ok(())
}

/// Write the version banner and the parser settings in effect.
pub fn write_version<W: Write>(out: &mut W, config: &Config) -> io::Result<()> {
    writeln!(
        out,
        "{} {} - Quantum Algorithm Description Language tools",
        style("QADL").cyan().bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).yellow()
    )?;

    let blocks = match config.parse_options(false).unterminated_blocks {
        BlockPolicy::Lenient => "lenient (closed at end of input)",
        BlockPolicy::Strict => "strict (rejected)",
    };
    writeln!(out)?;
    writeln!(out, "Unterminated blocks: {blocks}")?;
    writeln!(out, "Output format:       {}", config.output.format)?;
    writeln!(out, "Log level:           {}", config.logging.level)?;
    Ok(())
}
