use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use blueprint_core::params::RunParams;
use blueprint_core::phase::Phase;
use blueprint_core::volume::SparseVolume;

use crate::error::PersistError;
use crate::format::modeline;
use crate::layout::write_volume;

/// Create the output directory (and parents) if it does not exist yet.
pub fn create_output_dir(dir: &Path) -> Result<(), PersistError> {
    std::fs::create_dir_all(dir).map_err(|source| PersistError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// The set of files one run writes to.
///
/// Each file is created (truncating old content) the first time a phase
/// targets it and is appended to by later phases with the same path. Files
/// are closed when this value is dropped, on success and on error alike.
#[derive(Default)]
pub struct OutputFiles {
    files: BTreeMap<PathBuf, BufWriter<File>>,
}

impl OutputFiles {
    pub fn new() -> Self {
        Self::default()
    }

    fn writer(&mut self, path: &Path) -> Result<&mut BufWriter<File>, PersistError> {
        match self.files.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file = File::create(path).map_err(|source| PersistError::Open {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(entry.insert(BufWriter::new(file)))
            }
        }
    }

    /// Append one phase section (header line plus body) to `path`.
    pub fn write_phase(
        &mut self,
        path: &Path,
        phase: Phase,
        params: &RunParams,
        volume: &SparseVolume,
    ) -> Result<(), PersistError> {
        let out = self.writer(path)?;
        writeln!(out, "{}", modeline(phase))
            .and_then(|()| write_volume(out, params, volume))
            .map_err(|source| PersistError::Write {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Number of distinct files opened so far.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Flush and close every file. Returns the paths written, sorted.
    pub fn finish(self) -> Result<Vec<PathBuf>, PersistError> {
        let mut written = Vec::with_capacity(self.files.len());
        for (path, mut writer) in self.files {
            writer.flush().map_err(|source| PersistError::Write {
                path: path.clone(),
                source,
            })?;
            log::info!("wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}
