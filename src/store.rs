//! Plain-text password file store.
//!
//! The file holds exactly the password: no delimiter, no trailing newline.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{PassError, Result};

pub const DEFAULT_FILE: &str = "passwords.txt";

/// Target path for a filename field; blank means [`DEFAULT_FILE`].
pub fn resolve(field: &str) -> PathBuf {
    match field.trim() {
        "" => PathBuf::from(DEFAULT_FILE),
        name => PathBuf::from(name),
    }
}

/// Overwrite `path` with `password`.
pub fn save(path: &Path, password: &str) -> Result<()> {
    fs::write(path, password.as_bytes()).map_err(|e| write_error(path, e))?;
    info!("saved password to {}", path.display());
    Ok(())
}

/// Write `password` only if `path` does not exist yet. Returns whether it wrote.
pub fn save_if_absent(path: &Path, password: &str) -> Result<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!("{} already exists, leaving it untouched", path.display());
            return Ok(false);
        }
        Err(e) => return Err(write_error(path, e)),
    };
    fill_new(&mut file, path, password)?;
    info!("created {} with the new password", path.display());
    Ok(true)
}

/// Write into a file this call just created. On failure the file is removed,
/// so a later `save_if_absent` does not find a truncated password.
fn fill_new<W: Write>(file: &mut W, path: &Path, password: &str) -> Result<()> {
    let written = file.write_all(password.as_bytes()).and_then(|()| file.flush());
    written.map_err(|e| {
        if let Err(rm) = fs::remove_file(path) {
            warn!("could not remove partial {}: {rm}", path.display());
        }
        write_error(path, e)
    })
}

/// Read the whole file, trimmed of surrounding whitespace.
pub fn load(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PassError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => PassError::FileError {
            action: "read",
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    info!("loaded password from {}", path.display());
    Ok(contents.trim().to_string())
}

fn write_error(path: &Path, source: io::Error) -> PassError {
    PassError::FileError {
        action: "write",
        path: path.to_path_buf(),
        source,
    }
}
