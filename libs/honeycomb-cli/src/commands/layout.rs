//! honeycomb layout command - inspect the lattice without building geometry.

use anyhow::{Context, Result};
use colored::Colorize;
use config::constants::COVERAGE_SAMPLES;
use honeycomb::{CellClip, LatticeField, PlacedCell};
use serde::Serialize;

use super::LatticeArgs;
use crate::output::{self, field};
use crate::{Cli, OutputFormat};

#[derive(Serialize)]
struct LayoutInfo {
    clip: CellClip,
    row_margin: f64,
    center_distance: f64,
    x_delta: f64,
    columns: i64,
    rows: i64,
    tiled_cells: usize,
    placed_cells: usize,
    coverage_gaps: usize,
    coverage_samples: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    cells: Option<Vec<PlacedCell>>,
}

pub fn run(lattice: &LatticeArgs, list_cells: bool, cli: &Cli) -> Result<()> {
    let (params, config) = lattice.resolve()?;
    let lattice_field =
        LatticeField::compute(&params, &config).context("Failed to compute lattice layout")?;
    let layout = lattice_field.layout();

    let info = LayoutInfo {
        clip: lattice_field.clip(),
        row_margin: config.row_margin,
        center_distance: layout.center_distance,
        x_delta: layout.x_delta,
        columns: layout.bounds.columns,
        rows: layout.bounds.rows,
        tiled_cells: lattice_field.tiled_count(),
        placed_cells: lattice_field.len(),
        coverage_gaps: lattice_field.coverage_gaps(COVERAGE_SAMPLES),
        coverage_samples: COVERAGE_SAMPLES * COVERAGE_SAMPLES,
        cells: list_cells.then(|| lattice_field.cells().to_vec()),
    };

    match cli.format {
        OutputFormat::Json => output::print(&info, cli.format, cli.quiet),
        OutputFormat::Text => {
            if cli.quiet {
                return Ok(());
            }
            println!("{}", "Lattice Layout".bold().underline());
            println!("{}", field("Pitch", format!("{:.4} mm", info.center_distance)));
            println!("{}", field("Column step", format!("{:.4} mm", info.x_delta)));
            println!(
                "{}",
                field(
                    "Loop",
                    format!(
                        "columns [{}, {}), rows [{}, {})",
                        -info.columns, info.columns, -info.rows, info.rows
                    )
                )
            );
            println!(
                "{}",
                field(
                    "Cells",
                    format!(
                        "{} placed of {} tiled ({:?} clipping)",
                        info.placed_cells, info.tiled_cells, info.clip
                    )
                )
            );

            let coverage = if info.coverage_gaps == 0 {
                "complete".green().to_string()
            } else {
                format!(
                    "{} of {} samples uncovered",
                    info.coverage_gaps, info.coverage_samples
                )
                .yellow()
                .to_string()
            };
            println!("{}", field("Coverage", coverage));

            if let Some(cells) = &info.cells {
                println!();
                println!("{}", "Cells".bold());
                for placed in cells {
                    println!(
                        "  ({:>4}, {:>4})  x = {:>9.3}  y = {:>9.3}",
                        placed.cell.column, placed.cell.row, placed.center.x, placed.center.y
                    );
                }
            }
        }
    }

    Ok(())
}
