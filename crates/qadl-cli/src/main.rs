//! QADL Command-Line Interface
//!
//! Parses, checks and inspects `.qadl` quantum circuit scripts.
//!
//! ```text
//! qadl parse -i teleport.qadl --format json
//! qadl check -i grover.qadl --strict
//! qadl layout -i grover.qadl
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{check, layout, parse, version};
use config::{Config, OutputFormat};

/// QADL - Quantum Algorithm Description Language tools
#[derive(Parser)]
#[command(name = "qadl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(long, global = true, env = "QADL_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a script and print the circuit definition
    Parse {
        /// Input file (.qadl)
        #[arg(short, long)]
        input: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Reject blocks that are never closed
        #[arg(long)]
        strict: bool,
    },

    /// Check that a script parses
    Check {
        /// Input file (.qadl)
        #[arg(short, long)]
        input: String,

        /// Reject blocks that are never closed
        #[arg(long)]
        strict: bool,
    },

    /// Print qubit and classical-bit indices of every circuit
    Layout {
        /// Input file (.qadl)
        #[arg(short, long)]
        input: String,

        /// Reject blocks that are never closed
        #[arg(long)]
        strict: bool,
    },

    /// Show version information
    Version,
}

/// Log filter for a `-v` count, falling back to the configured level.
fn log_filter(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Commands::Parse {
            input,
            format,
            strict,
        } => {
            let format = match format {
                Some(format) => format,
                None => config.output_format()?,
            };
            parse::execute(&input, format, &config.parse_options(strict))
        }

        Commands::Check { input, strict } => check::execute(&input, &config.parse_options(strict)),

        Commands::Layout { input, strict } => {
            layout::execute(&input, &config.parse_options(strict))
        }

        Commands::Version => version::execute(config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    if !config.output.color {
        console::set_colors_enabled(false);
    }

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(cli.verbose, &config.logging.level)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Handle errors
    if let Err(e) = run(cli, &config) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
