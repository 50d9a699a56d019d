//! honeycomb properties command - list the feature property schema.

use anyhow::Result;
use colored::Colorize;
use honeycomb::property_schema;

use crate::output;
use crate::{Cli, OutputFormat};

pub fn run(cli: &Cli) -> Result<()> {
    let schema = property_schema();

    match cli.format {
        OutputFormat::Json => output::print(&schema, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Honeycomb Properties".bold().underline());
                for spec in &schema {
                    println!(
                        "  {:<13} {:<10} {:>6}  {}",
                        spec.name.cyan(),
                        spec.group,
                        spec.default,
                        spec.description.dimmed()
                    );
                }
            }
        }
    }

    Ok(())
}
