//! Colored text printing and truncation.

use std::io::Write;

use anyhow::Result;

use crate::style::{self, Style, RESET};

/// Write `text` wrapped in `style` and a reset, followed by `end`.
///
/// `end` is the line ending; pass `"\n"` for print-like behavior or `""`
/// to leave the cursor after the text.
pub fn print_colored<W: Write>(out: &mut W, text: &str, style: Style, end: &str) -> Result<()> {
    write!(out, "{}{}{}{}", style, text, RESET, end)?;
    Ok(())
}

macro_rules! print_shortcut {
    ($name:ident, $style:expr) => {
        /// Print `text` in one fixed color, forwarding the line ending.
        pub fn $name<W: Write>(out: &mut W, text: &str, end: &str) -> Result<()> {
            print_colored(out, text, $style, end)
        }
    };
}

print_shortcut!(print_black, style::BLACK);
print_shortcut!(print_red, style::RED);
print_shortcut!(print_green, style::GREEN);
print_shortcut!(print_yellow, style::YELLOW);
print_shortcut!(print_blue, style::BLUE);
print_shortcut!(print_magenta, style::MAGENTA);
print_shortcut!(print_cyan, style::CYAN);
print_shortcut!(print_light_gray, style::LIGHT_GRAY);
print_shortcut!(print_dark_gray, style::DARK_GRAY);
print_shortcut!(print_bright_red, style::BRIGHT_RED);
print_shortcut!(print_bright_green, style::BRIGHT_GREEN);
print_shortcut!(print_bright_yellow, style::BRIGHT_YELLOW);
print_shortcut!(print_bright_blue, style::BRIGHT_BLUE);
print_shortcut!(print_bright_magenta, style::BRIGHT_MAGENTA);
print_shortcut!(print_bright_cyan, style::BRIGHT_CYAN);

/// Truncate `text` to at most `max_len` characters.
///
/// Returns `text` unchanged when it already fits. Otherwise the result is
/// the first `max_len - 1` characters followed by `…`, exactly `max_len`
/// characters long. `max_len == 0` returns the empty string.
///
/// Counts characters, not bytes, so multi-byte input truncates cleanly.
pub fn trim_text(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut trimmed: String = text.chars().take(max_len - 1).collect();
    trimmed.push('…');
    trimmed
}
