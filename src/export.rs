use crate::error::{HfResult, HotkeyForgeError};
use crate::fsutil::atomic_write;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize, Deserialize)]
struct ExportPathFile {
    export_path: String,
}

/// Last chosen output file, or `default` if none was remembered.
pub fn load_export_path<P: AsRef<Path>>(path: P, default: &Path) -> PathBuf {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!("No export path at {}: {}", path.display(), e);
            return default.to_path_buf();
        }
    };

    match serde_json::from_str::<ExportPathFile>(&content) {
        Ok(file) if !file.export_path.trim().is_empty() => PathBuf::from(file.export_path.trim()),
        Ok(_) => default.to_path_buf(),
        Err(e) => {
            warn!("Ignoring malformed {}: {}", path.display(), e);
            default.to_path_buf()
        }
    }
}

pub fn save_export_path<P: AsRef<Path>>(path: P, export_path: &Path) -> HfResult<()> {
    let payload = ExportPathFile {
        export_path: export_path.to_string_lossy().into_owned(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    atomic_write(path, json)
}

/// Writes the compiled script verbatim.
///
/// Refuses empty scripts and empty destinations without touching the disk.
pub fn export_script(dest: &Path, script: &str) -> HfResult<()> {
    if script.trim().is_empty() {
        return Err(HotkeyForgeError::Validation(
            "Add at least one assignment before exporting.".to_string(),
        ));
    }
    if dest.as_os_str().is_empty() || dest.to_string_lossy().trim().is_empty() {
        return Err(HotkeyForgeError::Validation(
            "Please specify a save path for the exported script.".to_string(),
        ));
    }

    fs::write(dest, script).map_err(|source| HotkeyForgeError::Persist {
        path: dest.to_path_buf(),
        source,
    })?;
    info!("Script written to {}", dest.display());
    Ok(())
}
