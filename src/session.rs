//! Form session: the six text fields plus the generated and recovered passwords.

use std::path::PathBuf;

use log::{info, warn};
use zeroize::Zeroizing;

use crate::error::{PassError, Result};
use crate::pass::{self, Composition};
use crate::settings::Settings;
use crate::store;

/// Shown when the recover target exists but is empty.
pub const PLACEHOLDER_PASSWORD: &str = "7Ydo?Easdf!";

/// What happened to the save file right after generation.
#[derive(Debug)]
pub enum AutoSave {
    Written(PathBuf),
    /// The file already existed and was left as is.
    Skipped(PathBuf),
    Failed(PassError),
}

#[derive(Debug)]
pub struct Generated {
    pub composition: Composition,
    pub autosave: AutoSave,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Loaded {
    pub path: PathBuf,
    pub placeholder: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Uppercase,
    Special,
    Digits,
    SaveFile,
    LoadFile,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Length,
        Field::Uppercase,
        Field::Special,
        Field::Digits,
        Field::SaveFile,
        Field::LoadFile,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Length => "Password length",
            Field::Uppercase => "Uppercase count",
            Field::Special => "Special count",
            Field::Digits => "Digit count",
            Field::SaveFile => "File to save",
            Field::LoadFile => "File to recover",
        }
    }
}

pub struct FormSession {
    pub length: String,
    pub uppercase: String,
    pub special: String,
    pub digits: String,
    pub save_file: String,
    pub load_file: String,
    current: Option<Zeroizing<String>>,
    recovered: Zeroizing<String>,
    default_load: String,
}

impl FormSession {
    pub fn new(defaults: &Settings) -> Self {
        Self {
            length: String::new(),
            uppercase: String::new(),
            special: String::new(),
            digits: String::new(),
            save_file: defaults.save_file.clone(),
            load_file: defaults.load_file.clone(),
            current: None,
            recovered: Zeroizing::new(String::new()),
            default_load: defaults.load_file.clone(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Length => &self.length,
            Field::Uppercase => &self.uppercase,
            Field::Special => &self.special,
            Field::Digits => &self.digits,
            Field::SaveFile => &self.save_file,
            Field::LoadFile => &self.load_file,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Length => &mut self.length,
            Field::Uppercase => &mut self.uppercase,
            Field::Special => &mut self.special,
            Field::Digits => &mut self.digits,
            Field::SaveFile => &mut self.save_file,
            Field::LoadFile => &mut self.load_file,
        };
        *slot = value;
    }

    pub fn current_password(&self) -> Option<&str> {
        self.current.as_ref().map(|p| p.as_str())
    }

    pub fn recovered(&self) -> &str {
        &self.recovered
    }

    /// Validate the numeric fields, replace the current password and create
    /// the save file if it does not exist yet.
    pub fn generate(&mut self) -> Result<Generated> {
        let composition = self.composition()?;
        let password = pass::generate(&composition);
        Ok(self.accept(composition, password))
    }

    #[cfg(test)]
    pub fn generate_with<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Generated> {
        let composition = self.composition()?;
        let password = pass::generate_with(&composition, rng);
        Ok(self.accept(composition, password))
    }

    fn composition(&self) -> Result<Composition> {
        Composition::parse(&self.length, &self.uppercase, &self.special, &self.digits)
            .inspect_err(|e| warn!("generation rejected: {e}"))
    }

    fn accept(&mut self, composition: Composition, password: Zeroizing<String>) -> Generated {
        info!(
            "generated password: length {}, {} uppercase, {} special, {} digits",
            composition.length, composition.uppercase, composition.special, composition.digits
        );

        let path = resolve_into(&mut self.save_file);
        let autosave = match store::save_if_absent(&path, &password) {
            Ok(true) => AutoSave::Written(path),
            Ok(false) => AutoSave::Skipped(path),
            Err(e) => {
                warn!("auto-save failed: {e}");
                AutoSave::Failed(e)
            }
        };

        self.current = Some(password);
        Generated {
            composition,
            autosave,
        }
    }

    /// Overwrite the save file with the current password.
    pub fn save(&mut self) -> Result<PathBuf> {
        let Some(password) = self.current.as_ref() else {
            warn!("save requested with no generated password");
            return Err(PassError::NoPassword);
        };
        let path = resolve_into(&mut self.save_file);
        store::save(&path, password).inspect_err(|e| warn!("save failed: {e}"))?;
        Ok(path)
    }

    /// Read the load file into the recovered display.
    pub fn load(&mut self) -> Result<Loaded> {
        let path = resolve_into(&mut self.load_file);
        let password = Zeroizing::new(
            store::load(&path).inspect_err(|e| warn!("recover failed: {e}"))?,
        );

        let placeholder = password.is_empty();
        self.recovered = if placeholder {
            info!("{} is empty, showing the placeholder", path.display());
            Zeroizing::new(PLACEHOLDER_PASSWORD.to_string())
        } else {
            password
        };

        Ok(Loaded { path, placeholder })
    }

    /// Filenames currently in the form, as settings to persist.
    pub fn remembered_defaults(&self) -> Settings {
        Settings {
            save_file: self.save_file.trim().to_string(),
            load_file: store::resolve(&self.load_file).display().to_string(),
        }
    }

    /// Use `defaults` for future resets.
    pub fn adopt_defaults(&mut self, defaults: &Settings) {
        self.default_load = defaults.load_file.clone();
    }

    pub fn clear(&mut self) {
        self.length.clear();
        self.uppercase.clear();
        self.special.clear();
        self.digits.clear();
        self.save_file.clear();
        self.recovered = Zeroizing::new(String::new());
        self.current = None;
        self.load_file = self.default_load.clone();
    }
}

/// Resolve a filename field, writing the default back into a blank field.
fn resolve_into(field: &mut String) -> PathBuf {
    let path = store::resolve(field);
    if field.trim().is_empty() {
        *field = path.display().to_string();
    }
    path
}
