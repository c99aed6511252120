//! Settings file persistence.
//!
//! One line, comma separated; `|` escapes a literal `,` or `|`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 2;

pub fn save(path: &Path, settings: &Settings) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{}\n",
        escape(&settings.save_file),
        escape(&settings.load_file)
    );

    file.write_all(data.as_bytes())?;
    debug!("wrote settings to {}", path.display());
    Ok(())
}

pub fn load(path: &Path, settings: &mut Settings) -> std::io::Result<()> {
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("failed to create settings directory {}: {}", parent.display(), e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() {
        return save(path, settings);
    }

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() == FIELDS {
        settings.save_file = parts[0].clone();
        settings.load_file = parts[1].clone();
    } else {
        warn!(
            "malformed settings file {} ({} fields), restoring defaults",
            path.display(),
            parts.len()
        );
        *settings = Settings::default();
        save(path, settings)?;
    }

    Ok(())
}

#[inline]
pub fn config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config").join("passform")
}

#[inline]
pub fn get_path() -> PathBuf {
    config_dir().join("settings")
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn split_honours_escapes_and_empty_fields() {
        assert_eq!(split_escaped("a,b", ','), vec!["a", "b"]);
        assert_eq!(split_escaped(",passwords.txt", ','), vec!["", "passwords.txt"]);
        assert_eq!(split_escaped("a|,b,c||d", ','), vec!["a,b", "c|d"]);
        assert_eq!(split_escaped("", ','), vec![""]);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/settings");

        let mut settings = Settings::default();
        load(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), ",passwords.txt\n");
    }

    #[test]
    fn round_trips_paths_with_separators() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        let original = Settings {
            save_file: "out/a,b|c.txt".into(),
            load_file: "in.txt".into(),
        };

        save(&path, &original).unwrap();
        let mut loaded = Settings::default();
        load(&path, &mut loaded).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn malformed_line_restores_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "one,two,three\n").unwrap();

        let mut settings = Settings {
            save_file: "x".into(),
            load_file: "y".into(),
        };
        load(&path, &mut settings).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), ",passwords.txt\n");
    }
}
