//! honeycomb: command-line host for honeycomb lattice solids.
//!
//! Builds a honeycomb solid from the five lattice properties and writes it
//! as ASCII STL, or inspects the lattice layout without building geometry.
//!
//! # Logging
//!
//! Set the `RUST_LOG` environment variable to control log output:
//! - `RUST_LOG=honeycomb=info` - Build summaries
//! - `RUST_LOG=honeycomb=debug,lattice_mesh=debug` - Tiling and kernel steps
//! - `RUST_LOG=debug` - All debug output
//!
//! # Example
//!
//! ```bash
//! # Default 100 x 100 x 2 honeycomb
//! honeycomb build -o honeycomb.stl
//!
//! # Smaller cells, parameters from a file, JSON summary
//! honeycomb build --params part.json --circumradius 3 --format json
//!
//! # Where would the cells go?
//! honeycomb layout --length 60 --width 40 --cells
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use honeycomb::HoneycombError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod output;

use commands::{build, layout, properties, LatticeArgs};

/// honeycomb - Generate honeycomb lattice solids.
///
/// Cuts a staggered array of hexagonal prisms out of a box.
#[derive(Parser)]
#[command(name = "honeycomb")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for results
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Suppress all non-error output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Increase output verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for scripting
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a honeycomb solid and optionally write it as STL
    Build {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// Output STL file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the lattice layout without building geometry
    Layout {
        #[command(flatten)]
        lattice: LatticeArgs,

        /// List every placed cell
        #[arg(long)]
        cells: bool,
    },

    /// List the feature properties with their groups and defaults
    Properties,
}

/// Initialize the tracing subscriber based on verbosity level.
fn init_tracing(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    // RUST_LOG wins over -v flags
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "warn",
            1 => "honeycomb=info,lattice_mesh=info",
            2 => "honeycomb=debug,lattice_mesh=debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Commands::Build { lattice, output } => build::run(lattice, output.as_deref(), &cli),
        Commands::Layout { lattice, cells } => layout::run(lattice, *cells, &cli),
        Commands::Properties => properties::run(&cli),
    };

    if let Err(e) = &result {
        if !cli.quiet {
            eprintln!("{}: {}", "Error".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  {}: {}", "Caused by".yellow(), cause);
            }
            if let Some(HoneycombError::Configuration(_)) = e.downcast_ref::<HoneycombError>() {
                eprintln!(
                    "  {}: run `honeycomb properties` to see the valid properties",
                    "Hint".green()
                );
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
