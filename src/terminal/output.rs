//! Terminal output utilities.
//!
//! Box drawing, word wrapping, entropy labels, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[38;5;11m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    println!("│ {}{} │", content, " ".repeat(padding));
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    println!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    );
}

/// Print a horizontal rule inside a box.
pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print wrapped text, every line inside the box.
pub fn box_wrapped(text: &str) {
    for line in wrap_words(text, INNER_WIDTH) {
        box_line(&line);
    }
}

/// Print a key column and a description, wrapping the description.
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 18;
    let desc_col = INNER_WIDTH - key_col;

    let key_padded = format!("{:<width$}", key, width = key_col);
    let lines = wrap_words(desc, desc_col);

    match lines.first() {
        Some(first) => box_line(&format!("{}{}", key_padded, first)),
        None => box_line(&key_padded),
    }

    let indent = " ".repeat(key_col);
    for line in lines.iter().skip(1) {
        box_line(&format!("{}{}", indent, line));
    }
}

/// Split `text` on whitespace into lines of at most `width` columns.
/// A single word longer than `width` gets a line of its own.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if console_width(&current_line) + 1 + console_width(word) <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Entropy
// ============================================================================

/// Get entropy strength description.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_skips_escape_codes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}Error{RESET}")), 5);
        assert_eq!(console_width("ñandú"), 5);
    }

    #[test]
    fn wrap_words_respects_width() {
        let lines = wrap_words("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        assert!(wrap_words("   ", 10).is_empty());
        assert_eq!(wrap_words("abcdefghijkl", 4), vec!["abcdefghijkl"]);
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(entropy_strength(20.0), "Weak");
        assert_eq!(entropy_strength(50.5), "Fair");
        assert_eq!(entropy_strength(64.0), "Strong");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }
}
