use crate::pass::{CharClass, MAX_LENGTH, MIN_LENGTH};
use crate::session::{Field, FormSession};
use crate::store::DEFAULT_FILE;
use crate::terminal::{
    BOLD, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_rule,
    box_top, box_wrapped,
};

use super::notice::{Level, Notice};

pub fn choice_prompt() -> &'static str {
    "Select a field (1-6) or an action: "
}

pub fn print_form(session: &FormSession) {
    box_top("Password Generator");
    box_line("");
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let label = format!("{}:", field.label());
        box_line(&format!("  {}) {:<18} {}", i + 1, label, session.field(field)));
    }
    box_line("");
    box_rule();
    box_line("  g) Generate password        s) Save password to file");
    box_line("  r) Recover password         c) Clear fields");
    box_line("  b) Copy to clipboard        w) Remember file names");
    box_line("  h) Help                     q) Quit");
    box_rule();
    box_line(&format!(
        "  Recovered password: {BOLD}{}{RESET}",
        session.recovered()
    ));
    box_bottom();
}

pub fn print_notice(notice: &Notice) {
    let color = match notice.level {
        Level::Success => GREEN,
        Level::Info => "",
        Level::Warning => YELLOW,
        Level::Error => RED,
    };
    box_top(&format!("{color}{}{RESET}", notice.title));
    for line in &notice.lines {
        box_wrapped(line);
    }
    box_bottom();
}

pub fn print_help() {
    let special: String = CharClass::Special
        .alphabet()
        .iter()
        .map(|&b| b as char)
        .collect();

    box_top("Passform");
    box_line_center("Composition-controlled password generator");
    box_line("");
    box_line("FIELDS:");
    box_opt("  1) Length", &format!("Total number of characters, {MIN_LENGTH} to {MAX_LENGTH}."));
    box_opt("  2) Uppercase", "How many A-Z letters.");
    box_opt("  3) Special", &format!("How many of {special}"));
    box_opt("  4) Digits", "How many 0-9 digits.");
    box_opt(
        "",
        "Counts must not add up to more than the length. The rest are a-z letters.",
    );
    box_opt(
        "  5) Save file",
        &format!("Where s) writes the password. Blank means {DEFAULT_FILE}."),
    );
    box_opt(
        "  6) Recover file",
        &format!("Where r) reads a password from. Blank means {DEFAULT_FILE}."),
    );
    box_line("");
    box_line("ACTIONS:");
    box_opt(
        "  g, Enter",
        "Generate a password. The save file is created with it if it does not exist yet.",
    );
    box_opt("  s", "Overwrite the save file with the generated password.");
    box_opt("  r", "Show the password stored in the recover file.");
    box_opt("  c", "Clear every field and forget the generated password.");
    box_opt("  b", "Copy the generated password to the clipboard.");
    box_opt("  w", "Remember the current file names as defaults.");
    box_opt("  q, Esc", "Quit.");
    box_line("");
    box_line("EDITING:");
    box_opt("  Enter / Esc", "Accept / discard the edit.");
    box_opt("  Ctrl+U", "Clear the field.");
    box_opt("  Ctrl+C", "Exit immediately.");
    box_line("");
    box_wrapped("Passwords are stored as plain text: no encryption, no metadata.");
    box_bottom();
}
