use copypasta::{ClipboardContext, ClipboardProvider};
use log::{info, warn};

use crate::error::PassError;
use crate::session::{Field, FormSession};
use crate::settings::Settings;
use crate::terminal::{clear, flush, reset_terminal};

use super::notice::Notice;
use super::{choice_prompt, get_editable_input, print_form, print_help, print_notice, read_choice};

/// Form state that lives for the whole run.
struct Form {
    session: FormSession,
    // Kept alive so X11 clipboards keep serving the contents.
    clipboard: Option<ClipboardContext>,
}

pub fn gen_form(settings: &Settings) {
    let mut form = Form {
        session: FormSession::new(settings),
        clipboard: None,
    };
    let mut notice: Option<Notice> = None;

    loop {
        reset_terminal();
        clear();
        print_form(&form.session);
        if let Some(n) = &notice {
            println!();
            print_notice(n);
        }
        println!();
        print!("{}", choice_prompt());
        flush();

        let Some(choice) = read_choice() else {
            break;
        };
        println!();

        notice = match choice {
            '1'..='6' => {
                let field = Field::ALL[choice as usize - '1' as usize];
                if let Some(value) = get_editable_input(field.label(), form.session.field(field)) {
                    form.session.set_field(field, value);
                }
                None
            }
            'g' | '\n' => Some(form.generate()),
            's' => Some(form.save()),
            'r' => Some(form.load()),
            'c' => {
                form.session.clear();
                Some(Notice::cleared())
            }
            'b' => Some(form.copy()),
            'w' => Some(form.remember()),
            'h' => {
                clear();
                print_help();
                println!();
                print!("Press any key to return to the form");
                flush();
                let _ = read_choice();
                None
            }
            'q' => break,
            other => Some(Notice::invalid_choice(other)),
        };
    }

    reset_terminal();
    clear();
}

impl Form {
    fn generate(&mut self) -> Notice {
        match self.session.generate() {
            Ok(generated) => {
                Notice::generated(&generated, self.session.current_password().unwrap_or_default())
            }
            Err(e) => Notice::error(&e),
        }
    }

    fn save(&mut self) -> Notice {
        match self.session.save() {
            Ok(path) => Notice::saved(&path),
            Err(e) => Notice::error(&e),
        }
    }

    fn load(&mut self) -> Notice {
        match self.session.load() {
            Ok(loaded) => Notice::loaded(&loaded),
            Err(e) => Notice::error(&e),
        }
    }

    fn copy(&mut self) -> Notice {
        match self.copy_to_clipboard() {
            Ok(()) => {
                info!("copied password to clipboard");
                Notice::copied()
            }
            Err(e) => {
                warn!("{e}");
                Notice::error(&e)
            }
        }
    }

    fn copy_to_clipboard(&mut self) -> Result<(), PassError> {
        let password = self
            .session
            .current_password()
            .ok_or(PassError::NoPassword)?
            .to_string();

        if self.clipboard.is_none() {
            let ctx = ClipboardContext::new().map_err(|e| PassError::Clipboard(e.to_string()))?;
            self.clipboard = Some(ctx);
        }

        match self.clipboard.as_mut() {
            Some(ctx) => ctx
                .set_contents(password)
                .map_err(|e| PassError::Clipboard(e.to_string())),
            None => Err(PassError::Clipboard("clipboard unavailable".to_string())),
        }
    }

    fn remember(&mut self) -> Notice {
        let defaults = self.session.remembered_defaults();
        match defaults.save_to_file() {
            Ok(()) => {
                info!("stored form defaults in {}", Settings::path().display());
                self.session.adopt_defaults(&defaults);
                Notice::remembered(&defaults.save_file, &defaults.load_file)
            }
            Err(source) => {
                let e = PassError::FileError {
                    action: "write",
                    path: Settings::path(),
                    source,
                };
                warn!("{e}");
                Notice::error(&e)
            }
        }
    }
}
