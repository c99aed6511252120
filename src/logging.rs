//! Logging setup.
//!
//! The form owns the terminal, so records go to a log file next to the
//! settings. `RUST_LOG` overrides the default filter.

use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::settings::Settings;

const LOG_FILE: &str = "passform.log";

pub fn init() {
    if let Err(e) = init_file(&Settings::config_dir()) {
        Builder::from_env(Env::default().default_filter_or("error"))
            .target(Target::Stderr)
            .init();
        log::error!("could not open log file, logging to stderr: {e}");
    }
}

fn init_file(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .init();
    Ok(())
}
