use std::path::PathBuf;

use blueprint_core::constants::DEFAULT_OUTPUT_DIR;
use blueprint_core::params::{OutputFormat, RunParams, SplitStrategy};
use blueprint_core::phase::{Phase, PhaseSelection};
use blueprint_core::types::Position;
use clap::Parser;
use glam::IVec3;

/// Record a region of a world as replayable blueprint files.
#[derive(Debug, Parser)]
#[command(name = "blueprint")]
pub struct Cli {
    /// World snapshot (RON)
    #[arg(long)]
    pub world: PathBuf,

    /// First tile as x,y,z. Defaults to the cursor stored in the world.
    #[arg(long, value_parser = parse_position, allow_hyphen_values = true)]
    pub cursor: Option<Position>,

    #[arg(long)]
    pub width: i32,

    #[arg(long)]
    pub height: i32,

    /// Layers to scan; negative values go down
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub depth: i32,

    /// Base name of the output files, may contain sub-directories
    #[arg(long, default_value = "blueprint")]
    pub name: String,

    /// Comma separated phases (dig, build, place, query)
    #[arg(long, value_delimiter = ',', conflicts_with = "auto_phase")]
    pub phases: Vec<Phase>,

    /// Record every phase (the default when no phases are given)
    #[arg(long)]
    pub auto_phase: bool,

    /// pretty or minimal
    #[arg(long, default_value_t = OutputFormat::Minimal)]
    pub format: OutputFormat,

    /// none or phase
    #[arg(long, default_value_t = SplitStrategy::None)]
    pub split: SplitStrategy,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

impl Cli {
    pub fn run_params(&self) -> RunParams {
        let phases = if self.auto_phase || self.phases.is_empty() {
            PhaseSelection::Auto
        } else {
            PhaseSelection::Explicit(self.phases.clone())
        };
        let mut params = RunParams::new(self.name.clone(), self.width, self.height, self.depth)
            .with_phases(phases)
            .with_format(self.format)
            .with_split(self.split);
        if let Some(start) = self.cursor {
            params = params.with_start(start);
        }
        params
    }
}

fn parse_position(s: &str) -> Result<Position, String> {
    let coords = s
        .split(',')
        .map(|part| part.trim().parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in '{s}': {e}"))?;
    match coords[..] {
        [x, y, z] => Ok(IVec3::new(x, y, z)),
        _ => Err(format!("expected x,y,z, got '{s}'")),
    }
}
