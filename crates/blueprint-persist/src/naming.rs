use std::path::{Component, Path, PathBuf};

use blueprint_core::constants::{BLUEPRINT_EXTENSION, DEFAULT_OUTPUT_DIR};
use blueprint_core::params::{RunParams, SplitStrategy};
use blueprint_core::phase::Phase;

use crate::error::PersistError;

/// Decides where each phase of a run is written.
pub trait FileNamer {
    /// Directory that must exist before any file of the run is opened.
    fn output_dir(&self, params: &RunParams) -> Result<PathBuf, PersistError>;

    /// File a phase is written to. Phases resolving to the same path share
    /// one file.
    fn resolve(&self, params: &RunParams, phase: Phase) -> Result<PathBuf, PersistError>;
}

/// Default namer: `<root>/<name>.csv`, or `<root>/<name>-<phase>.csv` when
/// splitting by phase.
///
/// The name may contain `/` sub-directories. A trailing `/` names a directory
/// and repeats its last component as the file stem, so `walls/` becomes
/// `<root>/walls/walls.csv`.
#[derive(Debug, Clone)]
pub struct SplitNamer {
    root: PathBuf,
}

impl Default for SplitNamer {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl SplitNamer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Root-relative path of the run without extension or phase suffix.
    fn base_path(&self, name: &str) -> Result<PathBuf, PersistError> {
        let invalid = |reason: &str| PersistError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        let relative = Path::new(name);
        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part),
                Component::CurDir => {}
                _ => return Err(invalid("must be a relative path without '..'")),
            }
        }
        let Some(stem) = parts.last().copied() else {
            return Err(invalid("no file name component"));
        };

        let mut path = self.root.clone();
        path.extend(&parts);
        if name.ends_with('/') {
            path.push(stem);
        }
        Ok(path)
    }
}

impl FileNamer for SplitNamer {
    fn output_dir(&self, params: &RunParams) -> Result<PathBuf, PersistError> {
        let base = self.base_path(&params.name)?;
        Ok(base
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone()))
    }

    fn resolve(&self, params: &RunParams, phase: Phase) -> Result<PathBuf, PersistError> {
        let base = self
            .base_path(&params.name)
            .map_err(|e| PersistError::Filename {
                phase,
                reason: e.to_string(),
            })?;
        let stem = base
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| PersistError::Filename {
                phase,
                reason: "empty file name".to_string(),
            })?;

        let file_name = match params.split {
            SplitStrategy::None => format!("{stem}.{BLUEPRINT_EXTENSION}"),
            SplitStrategy::Phase => format!("{stem}-{}.{BLUEPRINT_EXTENSION}", phase.name()),
        };
        Ok(base.with_file_name(file_name))
    }
}
