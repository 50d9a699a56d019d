//! honeycomb build command - build a solid and write it as STL.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use honeycomb::{HexLatticeBuilder, MeshKernel};
use lattice_mesh::export::write_stl;
use serde::Serialize;
use tracing::info;

use super::LatticeArgs;
use crate::output::{self, field};
use crate::{Cli, OutputFormat};

#[derive(Serialize)]
struct BuildSummary {
    cells: usize,
    tiled_cells: usize,
    vertices: usize,
    triangles: usize,
    volume: f64,
    box_volume: f64,
    removed_fraction: f64,
    bounds: BoundsInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
}

#[derive(Serialize)]
struct BoundsInfo {
    min: [f64; 3],
    max: [f64; 3],
}

pub fn run(lattice: &LatticeArgs, output: Option<&Path>, cli: &Cli) -> Result<()> {
    let (params, config) = lattice.resolve()?;

    let built = HexLatticeBuilder::new(MeshKernel)
        .with_config(config)
        .build_lattice(&params)
        .context("Failed to build honeycomb solid")?;
    let solid = &built.solid;

    if let Some(path) = output {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file {:?}", path))?;
        write_stl(solid, "honeycomb", BufWriter::new(file))
            .with_context(|| format!("Failed to write STL to {:?}", path))?;
        info!(path = %path.display(), triangles = solid.triangle_count(), "Wrote STL");
    }

    let (min, max) = solid.bounding_box();
    let box_volume = params.length * params.width * params.height;
    let volume = solid.volume();
    let summary = BuildSummary {
        cells: built.field.len(),
        tiled_cells: built.field.tiled_count(),
        vertices: solid.vertex_count(),
        triangles: solid.triangle_count(),
        volume,
        box_volume,
        removed_fraction: 1.0 - volume / box_volume,
        bounds: BoundsInfo {
            min: min.to_array(),
            max: max.to_array(),
        },
        output: output.map(|p| p.display().to_string()),
    };

    match cli.format {
        OutputFormat::Json => output::print(&summary, cli.format, cli.quiet),
        OutputFormat::Text => {
            if !cli.quiet {
                println!("{}", "Honeycomb Solid".bold().underline());
                println!(
                    "{}",
                    field(
                        "Box",
                        format!(
                            "{} x {} x {} mm",
                            params.length, params.width, params.height
                        )
                    )
                );
                println!(
                    "{}",
                    field(
                        "Hexagons",
                        format!(
                            "r = {} mm, walls {} mm",
                            params.circumradius, params.thickness
                        )
                    )
                );
                println!(
                    "{}",
                    field(
                        "Cells",
                        format!("{} of {} tiled", summary.cells, summary.tiled_cells)
                    )
                );
                println!("{}", field("Vertices", summary.vertices));
                println!("{}", field("Triangles", summary.triangles));
                println!(
                    "{}",
                    field(
                        "Volume",
                        format!(
                            "{:.2} mm³ ({:.1}% removed)",
                            summary.volume,
                            summary.removed_fraction * 100.0
                        )
                    )
                );
                println!(
                    "{}",
                    field(
                        "Bounds",
                        format!(
                            "({:.2}, {:.2}, {:.2}) - ({:.2}, {:.2}, {:.2})",
                            min.x, min.y, min.z, max.x, max.y, max.z
                        )
                    )
                );
                if let Some(path) = &summary.output {
                    println!("{} {}", "Wrote".green().bold(), path);
                }
            }
        }
    }

    Ok(())
}
