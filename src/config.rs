use crate::consts::{
    DEFAULT_EXPORT_FILENAME, EXPORT_PATH_FILENAME, KEYBOARD_PROFILES_FILENAME,
    SCRIPT_HEADER_FILENAME, SETTINGS_FILENAME,
};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the editor keeps its files. Relative names resolve against `data_dir`.
#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    #[arg(global = true, long, default_value = ".")]
    pub data_dir: PathBuf,
    #[arg(global = true, long, default_value = SETTINGS_FILENAME)]
    pub settings_file: PathBuf,
    #[arg(global = true, long, default_value = KEYBOARD_PROFILES_FILENAME)]
    pub profiles_file: PathBuf,
    #[arg(global = true, long, default_value = SCRIPT_HEADER_FILENAME)]
    pub header_file: PathBuf,
    #[arg(global = true, long, default_value = EXPORT_PATH_FILENAME)]
    pub export_path_file: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(".")
    }
}

impl DataPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            settings_file: SETTINGS_FILENAME.into(),
            profiles_file: KEYBOARD_PROFILES_FILENAME.into(),
            header_file: SCRIPT_HEADER_FILENAME.into(),
            export_path_file: EXPORT_PATH_FILENAME.into(),
        }
    }

    fn resolve(&self, name: &Path) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn settings(&self) -> PathBuf {
        self.resolve(&self.settings_file)
    }

    pub fn profiles(&self) -> PathBuf {
        self.resolve(&self.profiles_file)
    }

    pub fn header(&self) -> PathBuf {
        self.resolve(&self.header_file)
    }

    pub fn export_path(&self) -> PathBuf {
        self.resolve(&self.export_path_file)
    }

    /// Output file used until the user picks one.
    pub fn default_export(&self) -> PathBuf {
        self.data_dir.join(DEFAULT_EXPORT_FILENAME)
    }
}

#[derive(Args, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[command(flatten)]
    pub paths: DataPaths,

    /// Profile to edit (label or id). Defaults to the last used one.
    #[arg(global = true, short, long)]
    pub profile: Option<String>,
}
