use std::path::PathBuf;

use glam::IVec3;

/// Errors building or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("failed to read world file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse world RON: {0}")]
    Parse(String),

    #[error("world bounds must be positive on every axis, got {},{},{}", .0.x, .0.y, .0.z)]
    InvalidBounds(IVec3),

    #[error("position {},{},{} is outside the world", .0.x, .0.y, .0.z)]
    OutOfBounds(IVec3),

    #[error("structure at {},{},{} overlaps an existing structure", .0.x, .0.y, .0.z)]
    Overlap(IVec3),
}
