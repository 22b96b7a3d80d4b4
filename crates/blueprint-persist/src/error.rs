use std::path::PathBuf;

use blueprint_core::phase::Phase;

/// Errors that can occur while writing blueprint files.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("could not create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open '{}' for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve a filename for phase {phase}: {reason}")]
    Filename { phase: Phase, reason: String },

    #[error("invalid blueprint name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}
