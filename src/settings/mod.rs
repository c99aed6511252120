//! Persisted form defaults.

mod file;

use std::path::PathBuf;

use crate::store::DEFAULT_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub save_file: String,
    pub load_file: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&file::get_path(), &mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&file::get_path(), self)
    }

    pub fn path() -> PathBuf {
        file::get_path()
    }

    /// Directory holding the settings and log files.
    pub fn config_dir() -> PathBuf {
        file::config_dir()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_file: String::new(),
            load_file: String::from(DEFAULT_FILE),
        }
    }
}
