use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Quit,
}

/// Single-line editor state; `cursor` is a char index into `chars`.
#[derive(Debug, Default)]
pub struct LineEditor {
    chars: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Quit,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.chars.len() {
                    self.chars.remove(self.cursor);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// Edit a value in place. `None` when the user pressed Esc.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut editor = LineEditor::new(initial_value);

    // RawModeGuard ensures raw mode is disabled even if we return early
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(editor.text()),
    };

    redraw(prompt, &editor);

    let outcome = loop {
        match read() {
            Ok(Event::Key(key_event)) if key_event.kind == KeyEventKind::Press => {
                match editor.apply(key_event) {
                    Edit::Continue => redraw(prompt, &editor),
                    Edit::Quit => {
                        // process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    done => break done,
                }
            }
            Err(_) => break Edit::Cancel,
            _ => {}
        }
    };

    drop(guard);
    println!();
    match outcome {
        Edit::Submit => Some(editor.text()),
        _ => None,
    }
}

/// Wait for a single key press. Enter and Esc map to `'\n'` and `'q'`.
pub fn read_choice() -> Option<char> {
    let _guard = RawModeGuard::new().ok()?;

    loop {
        match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                return match key.code {
                    KeyCode::Char('c') if ctrl => {
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Esc => Some('q'),
                    KeyCode::Enter => Some('\n'),
                    KeyCode::Char(c) => Some(c.to_ascii_lowercase()),
                    _ => continue,
                };
            }
            Err(_) => return None,
            _ => {}
        }
    }
}

fn redraw(prompt: &str, editor: &LineEditor) {
    print!("\r\x1b[2K{}: {}", prompt, editor.text());
    print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor());
    flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(editor: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(editor.apply(key(KeyCode::Char(c))), Edit::Continue);
        }
    }

    #[test]
    fn inserts_at_cursor() {
        let mut e = LineEditor::new("1");
        assert_eq!(e.cursor(), 1);
        e.apply(key(KeyCode::Home));
        type_str(&mut e, "2");
        e.apply(key(KeyCode::End));
        type_str(&mut e, "0");
        assert_eq!(e.text(), "210");
    }

    #[test]
    fn backspace_and_delete_handle_multibyte_chars() {
        let mut e = LineEditor::new("añb");
        e.apply(key(KeyCode::Left));
        assert_eq!(e.apply(key(KeyCode::Backspace)), Edit::Continue);
        assert_eq!(e.text(), "ab");
        e.apply(key(KeyCode::Delete));
        assert_eq!(e.text(), "a");
        e.apply(key(KeyCode::Delete));
        assert_eq!(e.text(), "a");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut e = LineEditor::new("ab");
        for _ in 0..5 {
            e.apply(key(KeyCode::Right));
        }
        assert_eq!(e.cursor(), 2);
        for _ in 0..5 {
            e.apply(key(KeyCode::Left));
        }
        assert_eq!(e.cursor(), 0);
        e.apply(key(KeyCode::Backspace));
        assert_eq!(e.text(), "ab");
    }

    #[test]
    fn control_keys_finish_or_clear() {
        let mut e = LineEditor::new("passwords.txt");
        assert_eq!(e.apply(ctrl('u')), Edit::Continue);
        assert_eq!(e.text(), "");
        assert_eq!(e.apply(ctrl('x')), Edit::Continue);
        assert_eq!(e.text(), "");
        assert_eq!(e.apply(key(KeyCode::Enter)), Edit::Submit);
        assert_eq!(e.apply(key(KeyCode::Esc)), Edit::Cancel);
        assert_eq!(e.apply(ctrl('q')), Edit::Cancel);
        assert_eq!(e.apply(ctrl('c')), Edit::Quit);
    }
}
