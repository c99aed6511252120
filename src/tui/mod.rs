//! Interactive terminal form.

mod form;
mod input;
mod notice;
mod text;

pub use form::*;
pub use input::*;
pub use text::*;

use log::warn;

use crate::settings::Settings;

/// Run the form until the user quits.
pub fn run() {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!("failed to load settings, using defaults: {e}");
        Settings::default()
    });
    gen_form(&settings);
}
