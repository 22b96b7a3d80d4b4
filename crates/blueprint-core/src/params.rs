use std::fmt;
use std::str::FromStr;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    LAYER_SEPARATOR_ASCENDING, LAYER_SEPARATOR_DESCENDING, PLACEHOLDER_MINIMAL,
    PLACEHOLDER_PRETTY,
};
use crate::error::BlueprintError;
use crate::phase::PhaseSelection;
use crate::types::Position;

/// Serialization layout of generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Full rectangular grid with blank cells.
    Pretty,
    /// Gap-compressed: only recorded cells, separators for the gaps.
    #[default]
    Minimal,
}

impl OutputFormat {
    /// Token written by non-anchor tiles of a multi-tile structure.
    pub fn placeholder(self) -> &'static str {
        match self {
            OutputFormat::Pretty => PLACEHOLDER_PRETTY,
            OutputFormat::Minimal => PLACEHOLDER_MINIMAL,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pretty" => Ok(OutputFormat::Pretty),
            "minimal" => Ok(OutputFormat::Minimal),
            other => Err(format!("unknown format '{other}' (expected pretty or minimal)")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => f.write_str("pretty"),
            OutputFormat::Minimal => f.write_str("minimal"),
        }
    }
}

/// How phases are distributed over output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SplitStrategy {
    /// All phases in one file.
    #[default]
    None,
    /// One file per phase.
    Phase,
}

impl FromStr for SplitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SplitStrategy::None),
            "phase" => Ok(SplitStrategy::Phase),
            other => Err(format!("unknown split strategy '{other}' (expected none or phase)")),
        }
    }
}

impl fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStrategy::None => f.write_str("none"),
            SplitStrategy::Phase => f.write_str("phase"),
        }
    }
}

/// Everything one blueprint run needs. Immutable once the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunParams {
    /// First tile of the scanned volume. `None` uses the world cursor.
    pub start: Option<Position>,
    /// Width in tiles, always positive.
    pub width: i32,
    /// Height in tiles, always positive.
    pub height: i32,
    /// Number of layers; negative scans toward lower z. Never zero.
    pub depth: i32,
    /// Base name of the generated files, may contain `/` sub-directories.
    pub name: String,
    pub phases: PhaseSelection,
    pub format: OutputFormat,
    pub split: SplitStrategy,
}

impl RunParams {
    pub fn new(name: impl Into<String>, width: i32, height: i32, depth: i32) -> Self {
        Self {
            start: None,
            width,
            height,
            depth,
            name: name.into(),
            phases: PhaseSelection::Auto,
            format: OutputFormat::default(),
            split: SplitStrategy::default(),
        }
    }

    pub fn with_start(mut self, start: Position) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_phases(mut self, phases: PhaseSelection) -> Self {
        self.phases = phases;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_split(mut self, split: SplitStrategy) -> Self {
        self.split = split;
        self
    }

    /// Check everything that can be checked without a world.
    pub fn validate(&self) -> Result<(), BlueprintError> {
        if self.phases.active().is_empty() {
            return Err(BlueprintError::NoPhases);
        }
        if self.width <= 0 || self.height <= 0 || self.depth == 0 {
            return Err(BlueprintError::InvalidDimensions {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        if self.name.trim().is_empty() {
            return Err(BlueprintError::EmptyName);
        }
        Ok(())
    }

    /// Line written between layers.
    pub fn layer_separator(&self) -> &'static str {
        if self.depth > 0 {
            LAYER_SEPARATOR_ASCENDING
        } else {
            LAYER_SEPARATOR_DESCENDING
        }
    }

    /// One past the last scanned coordinate on each axis, before cropping.
    pub fn raw_end(&self, start: Position) -> Position {
        start + IVec3::new(self.width, self.height, self.depth)
    }
}

/// Crop an exclusive end coordinate to the world. `bounds` holds the tile
/// counts per axis; z may go down to -1 so a downward scan can include layer 0.
pub fn clamp_end(end: Position, bounds: IVec3) -> Position {
    IVec3::new(
        end.x.clamp(0, bounds.x),
        end.y.clamp(0, bounds.y),
        end.z.clamp(-1, bounds.z),
    )
}
