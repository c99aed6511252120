//! Notification surface: the message box shown under the form.

use std::path::Path;

use zeroize::Zeroize;

use crate::error::PassError;
use crate::pass::CharClass;
use crate::session::{AutoSave, Generated, Loaded};
use crate::terminal::entropy_strength;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug)]
pub struct Notice {
    pub level: Level,
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl Notice {
    fn new(level: Level, title: &'static str, lines: Vec<String>) -> Self {
        Self {
            level,
            title,
            lines,
        }
    }

    pub fn generated(generated: &Generated, password: &str) -> Self {
        let bits = generated.composition.entropy_bits();
        let mut lines = vec![
            format!("Password generated: {password}"),
            describe_classes(password),
            format!("Entropy: {:.1} bits ({})", bits, entropy_strength(bits)),
        ];
        let level = match &generated.autosave {
            AutoSave::Written(path) => {
                lines.push(format!("Created {}", path.display()));
                Level::Success
            }
            AutoSave::Skipped(_) => Level::Success,
            AutoSave::Failed(e) => {
                lines.push(format!("Could not create the file: {e}"));
                Level::Warning
            }
        };
        Self::new(level, "Generated", lines)
    }

    pub fn saved(path: &Path) -> Self {
        Self::new(
            Level::Success,
            "Saved",
            vec![format!("Password saved to: {}", path.display())],
        )
    }

    pub fn loaded(loaded: &Loaded) -> Self {
        if loaded.placeholder {
            Self::new(
                Level::Info,
                "Demo",
                vec![format!(
                    "{} was empty, showing the example password",
                    loaded.path.display()
                )],
            )
        } else {
            Self::new(
                Level::Success,
                "Recovered",
                vec![format!("Password recovered from: {}", loaded.path.display())],
            )
        }
    }

    pub fn cleared() -> Self {
        Self::new(Level::Info, "Cleared", vec!["All fields cleared".to_string()])
    }

    pub fn copied() -> Self {
        Self::new(
            Level::Success,
            "Clipboard",
            vec!["Password copied to the clipboard".to_string()],
        )
    }

    pub fn remembered(save_file: &str, load_file: &str) -> Self {
        let save_file = if save_file.is_empty() { "(blank)" } else { save_file };
        Self::new(
            Level::Success,
            "Settings",
            vec![
                format!("Default save file: {save_file}"),
                format!("Default recover file: {load_file}"),
            ],
        )
    }

    pub fn invalid_choice(choice: char) -> Self {
        Self::new(
            Level::Warning,
            "Invalid selection",
            vec![format!("{:?} is not a menu option, press h for help", choice)],
        )
    }

    pub fn error(err: &PassError) -> Self {
        let (level, title) = match err {
            PassError::NoPassword => (Level::Warning, "Nothing to do"),
            e if e.is_user_error() => (Level::Error, "Invalid input"),
            _ => (Level::Error, "Error"),
        };
        Self::new(level, title, vec![err.to_string()])
    }
}

/// "2 uppercase, 2 special, 2 digits, 4 lowercase", counted from the password itself.
fn describe_classes(password: &str) -> String {
    let count = |class: CharClass| {
        password
            .chars()
            .filter(|&c| CharClass::of(c) == Some(class))
            .count()
    };
    format!(
        "{} uppercase, {} special, {} digits, {} lowercase",
        count(CharClass::Uppercase),
        count(CharClass::Special),
        count(CharClass::Digit),
        count(CharClass::Lowercase)
    )
}

impl Drop for Notice {
    fn drop(&mut self) {
        self.lines.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::Composition;
    use std::io;
    use std::path::PathBuf;

    fn generated(autosave: AutoSave) -> Generated {
        Generated {
            composition: Composition::parse("10", "2", "2", "2").unwrap(),
            autosave,
        }
    }

    #[test]
    fn generated_notice_shows_password_and_entropy() {
        let g = generated(AutoSave::Written(PathBuf::from("passwords.txt")));
        let n = Notice::generated(&g, "aB3$efGh?1");
        assert_eq!(n.level, Level::Success);
        assert_eq!(n.lines[0], "Password generated: aB3$efGh?1");
        assert_eq!(n.lines[1], "2 uppercase, 2 special, 2 digits, 4 lowercase");
        assert!(n.lines[2].starts_with("Entropy: "));
        assert_eq!(n.lines[3], "Created passwords.txt");
    }

    #[test]
    fn failed_autosave_is_a_warning() {
        let g = generated(AutoSave::Failed(PassError::FileError {
            action: "write",
            path: PathBuf::from("x/p.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        }));
        let n = Notice::generated(&g, "pw");
        assert_eq!(n.level, Level::Warning);
        assert_eq!(n.lines.len(), 4);

        let skipped = Notice::generated(&generated(AutoSave::Skipped(PathBuf::from("p"))), "pw");
        assert_eq!(skipped.lines.len(), 3);
    }

    #[test]
    fn placeholder_load_is_reported_as_demo() {
        let n = Notice::loaded(&Loaded {
            path: PathBuf::from("passwords.txt"),
            placeholder: true,
        });
        assert_eq!(n.level, Level::Info);
        assert_eq!(n.title, "Demo");
    }

    #[test]
    fn errors_map_to_levels() {
        assert_eq!(Notice::error(&PassError::NoPassword).level, Level::Warning);

        let n = Notice::error(&PassError::LengthTooShort { length: 3, min: 4 });
        assert_eq!((n.level, n.title), (Level::Error, "Invalid input"));

        let n = Notice::error(&PassError::FileNotFound {
            path: PathBuf::from("nope.txt"),
        });
        assert_eq!((n.level, n.title), (Level::Error, "Error"));
        assert_eq!(n.lines, vec!["File not found: nope.txt"]);
    }
}
