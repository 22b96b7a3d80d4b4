use blueprint_core::error::BlueprintError;
use blueprint_persist::error::PersistError;
use thiserror::Error;

/// Anything that stops a blueprint run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Invalid(#[from] BlueprintError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
