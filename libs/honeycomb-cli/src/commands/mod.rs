//! Subcommands and the lattice options they share.

pub mod build;
pub mod layout;
pub mod properties;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use honeycomb::{CellClip, LatticeParameters, TilingConfig};

/// Lattice properties and tiling options.
///
/// Values from `--params` are loaded first; individual flags override them.
#[derive(Args, Debug, Clone, Default)]
pub struct LatticeArgs {
    /// JSON file with lattice parameters (missing fields use defaults)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Box length along x (mm)
    #[arg(long)]
    pub length: Option<f64>,

    /// Box width along y (mm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Box height along z (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Hexagon circumradius (mm)
    #[arg(long, short = 'r')]
    pub circumradius: Option<f64>,

    /// Wall thickness (mm)
    #[arg(long, short = 't')]
    pub thickness: Option<f64>,

    /// Which hexagons to keep at the box boundary
    #[arg(long, default_value = "overlap")]
    pub clip: ClipArg,

    /// Extra rows added to the tiling loop
    #[arg(long)]
    pub row_margin: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ClipArg {
    /// Keep hexagons that overlap the box
    #[default]
    Overlap,
    /// Keep only hexagons entirely inside the box
    Contained,
}

impl From<ClipArg> for CellClip {
    fn from(arg: ClipArg) -> Self {
        match arg {
            ClipArg::Overlap => CellClip::Overlap,
            ClipArg::Contained => CellClip::Contained,
        }
    }
}

impl LatticeArgs {
    /// Merges the parameter file, the flags and the defaults.
    pub fn resolve(&self) -> Result<(LatticeParameters, TilingConfig)> {
        let mut params = match &self.params {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read parameters from {:?}", path))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("Failed to parse parameters in {:?}", path))?
            }
            None => LatticeParameters::default(),
        };

        let overrides = [
            (&mut params.length, self.length),
            (&mut params.width, self.width),
            (&mut params.height, self.height),
            (&mut params.circumradius, self.circumradius),
            (&mut params.thickness, self.thickness),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }

        let mut config = TilingConfig {
            clip: self.clip.into(),
            ..TilingConfig::default()
        };
        if let Some(margin) = self.row_margin {
            config.row_margin = margin;
        }

        Ok((params, config))
    }
}
