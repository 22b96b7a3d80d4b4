use glam::IVec3;
use thiserror::Error;

/// Invalid run requests, detected before any file is touched.
#[derive(Debug, Error)]
pub enum BlueprintError {
    #[error("no phases requested! nothing to do!")]
    NoPhases,

    #[error("invalid start position: {},{},{}", .0.x, .0.y, .0.z)]
    InvalidStart(IVec3),

    #[error("invalid dimensions {width}x{height}x{depth} (width and height must be positive, depth non-zero)")]
    InvalidDimensions { width: i32, height: i32, depth: i32 },

    #[error("blueprint name must not be empty")]
    EmptyName,

    #[error("can't get cursor coords! specify a start position or set a cursor in the world")]
    NoCursor,
}
