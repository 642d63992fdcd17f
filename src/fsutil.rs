use crate::error::{HfResult, HotkeyForgeError};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// A pending replacement of `dest`, staged in a temp file next to it.
///
/// The temp file lives in the destination's directory so the final rename never
/// crosses a filesystem. Dropping a stage without committing removes the temp
/// file and leaves `dest` as it was.
pub struct StagedWrite {
    dest: PathBuf,
    temp: NamedTempFile,
}

impl StagedWrite {
    pub fn new<P: AsRef<Path>>(dest: P) -> HfResult<Self> {
        let dest = dest.as_ref().to_path_buf();
        let dir = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let temp = NamedTempFile::new_in(&dir).map_err(|source| HotkeyForgeError::Persist {
            path: dest.clone(),
            source,
        })?;
        Ok(Self { dest, temp })
    }

    /// Writes the full contents and syncs them to disk.
    pub fn write(&mut self, contents: &[u8]) -> HfResult<()> {
        let dest = &self.dest;
        let file = self.temp.as_file_mut();
        file.write_all(contents)
            .and_then(|_| file.sync_all())
            .map_err(|source| HotkeyForgeError::Persist {
                path: dest.clone(),
                source,
            })
    }

    pub fn temp_path(&self) -> &Path {
        self.temp.path()
    }

    /// Atomically replaces the destination with the staged contents.
    pub fn commit(self) -> HfResult<()> {
        let dest = self.dest;
        self.temp
            .persist(&dest)
            .map_err(|e| HotkeyForgeError::Persist {
                path: dest.clone(),
                source: e.error,
            })?;
        debug!("Persisted {}", dest.display());
        Ok(())
    }
}

/// Writes `contents` to `path` so that readers only ever see the old or the new file.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> HfResult<()> {
    let mut stage = StagedWrite::new(path)?;
    stage.write(contents.as_ref())?;
    stage.commit()
}
