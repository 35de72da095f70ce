//! Terminal colors and SGR style composition.
//!
//! Every color maps to one fixed SGR escape code; consumers depend on the
//! exact numeric codes, so the mapping is part of the public contract.
//! Styles compose a foreground, a background, and a bold flag into escape
//! sequences instead of concatenating raw strings.

use std::fmt;

/// Escape sequence that returns the terminal to its default style.
pub const RESET: &str = "\x1b[0m";

/// The 16 terminal colors.
///
/// Foreground SGR codes are 30-37 and 90-97; the matching background code
/// is always the foreground code plus 10 (40-47, 100-107).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    /// Renders as orange on some terminals.
    Yellow,
    Blue,
    Magenta,
    Cyan,
    LightGray,
    DarkGray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    White,
}

impl Color {
    /// The SGR foreground code for this color.
    pub fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::LightGray => 37,
            Color::DarkGray => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::White => 97,
        }
    }

    /// The SGR background code for this color.
    pub fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// A style with this color as plain foreground.
    pub const fn style(self) -> Style {
        Style {
            fg: Some(self),
            bg: None,
            bold: false,
        }
    }

    /// A style with this color as bold foreground.
    pub const fn bold(self) -> Style {
        Style {
            fg: Some(self),
            bg: None,
            bold: true,
        }
    }

    /// A style with this color as background only.
    pub const fn background(self) -> Style {
        Style {
            fg: None,
            bg: Some(self),
            bold: false,
        }
    }
}

/// A composed terminal style: optional background, optional foreground,
/// optional bold weight.
///
/// Rendered as at most two escape sequences, background first, so that a
/// background-plus-foreground style produces the same bytes as writing the
/// two codes back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    /// A style that renders nothing.
    pub const fn none() -> Style {
        Style {
            fg: None,
            bg: None,
            bold: false,
        }
    }

    /// This style with `bg` as its background color.
    pub const fn with_bg(self, bg: Color) -> Style {
        Style {
            bg: Some(bg),
            ..self
        }
    }

    /// Append the escape sequences for this style to `buf`.
    pub fn write_sgr(&self, buf: &mut String) {
        if let Some(bg) = self.bg {
            buf.push_str("\x1b[");
            buf.push_str(&bg.bg_code().to_string());
            buf.push('m');
        }
        match (self.fg, self.bold) {
            (Some(fg), true) => {
                buf.push_str("\x1b[1;");
                buf.push_str(&fg.fg_code().to_string());
                buf.push('m');
            }
            (Some(fg), false) => {
                buf.push_str("\x1b[");
                buf.push_str(&fg.fg_code().to_string());
                buf.push('m');
            }
            (None, true) => buf.push_str("\x1b[1m"),
            (None, false) => {}
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_sgr(&mut buf);
        f.write_str(&buf)
    }
}

// Plain foreground styles.
pub const BLACK: Style = Color::Black.style();
pub const RED: Style = Color::Red.style();
pub const GREEN: Style = Color::Green.style();
pub const YELLOW: Style = Color::Yellow.style();
pub const BLUE: Style = Color::Blue.style();
pub const MAGENTA: Style = Color::Magenta.style();
pub const CYAN: Style = Color::Cyan.style();
pub const LIGHT_GRAY: Style = Color::LightGray.style();
pub const DARK_GRAY: Style = Color::DarkGray.style();
pub const BRIGHT_RED: Style = Color::BrightRed.style();
pub const BRIGHT_GREEN: Style = Color::BrightGreen.style();
pub const BRIGHT_YELLOW: Style = Color::BrightYellow.style();
pub const BRIGHT_BLUE: Style = Color::BrightBlue.style();
pub const BRIGHT_MAGENTA: Style = Color::BrightMagenta.style();
pub const BRIGHT_CYAN: Style = Color::BrightCyan.style();
pub const WHITE: Style = Color::White.style();

// Bold foreground styles.
pub const BOLD_BLACK: Style = Color::Black.bold();
pub const BOLD_RED: Style = Color::Red.bold();
pub const BOLD_GREEN: Style = Color::Green.bold();
pub const BOLD_YELLOW: Style = Color::Yellow.bold();
pub const BOLD_BLUE: Style = Color::Blue.bold();
pub const BOLD_MAGENTA: Style = Color::Magenta.bold();
pub const BOLD_CYAN: Style = Color::Cyan.bold();
pub const BOLD_LIGHT_GRAY: Style = Color::LightGray.bold();
pub const BOLD_DARK_GRAY: Style = Color::DarkGray.bold();
pub const BOLD_BRIGHT_RED: Style = Color::BrightRed.bold();
pub const BOLD_BRIGHT_GREEN: Style = Color::BrightGreen.bold();
pub const BOLD_BRIGHT_YELLOW: Style = Color::BrightYellow.bold();
pub const BOLD_BRIGHT_BLUE: Style = Color::BrightBlue.bold();
pub const BOLD_BRIGHT_MAGENTA: Style = Color::BrightMagenta.bold();
pub const BOLD_BRIGHT_CYAN: Style = Color::BrightCyan.bold();
pub const BOLD_WHITE: Style = Color::White.bold();

// Background styles.
pub const BG_BLACK: Style = Color::Black.background();
pub const BG_RED: Style = Color::Red.background();
pub const BG_GREEN: Style = Color::Green.background();
pub const BG_YELLOW: Style = Color::Yellow.background();
pub const BG_BLUE: Style = Color::Blue.background();
pub const BG_MAGENTA: Style = Color::Magenta.background();
pub const BG_CYAN: Style = Color::Cyan.background();
pub const BG_LIGHT_GRAY: Style = Color::LightGray.background();
pub const BG_DARK_GRAY: Style = Color::DarkGray.background();
pub const BG_BRIGHT_RED: Style = Color::BrightRed.background();
pub const BG_BRIGHT_GREEN: Style = Color::BrightGreen.background();
pub const BG_BRIGHT_YELLOW: Style = Color::BrightYellow.background();
pub const BG_BRIGHT_BLUE: Style = Color::BrightBlue.background();
pub const BG_BRIGHT_MAGENTA: Style = Color::BrightMagenta.background();
pub const BG_BRIGHT_CYAN: Style = Color::BrightCyan.background();
pub const BG_WHITE: Style = Color::White.background();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fg_codes_all_basic_colors() {
        let test_cases = [
            (Color::Black, "\x1b[30m"),
            (Color::Red, "\x1b[31m"),
            (Color::Green, "\x1b[32m"),
            (Color::Yellow, "\x1b[33m"),
            (Color::Blue, "\x1b[34m"),
            (Color::Magenta, "\x1b[35m"),
            (Color::Cyan, "\x1b[36m"),
            (Color::LightGray, "\x1b[37m"),
        ];

        for (color, expected) in test_cases {
            assert_eq!(color.style().to_string(), expected, "Failed for {:?}", color);
        }
    }

    #[test]
    fn fg_codes_all_bright_colors() {
        let test_cases = [
            (Color::DarkGray, "\x1b[90m"),
            (Color::BrightRed, "\x1b[91m"),
            (Color::BrightGreen, "\x1b[92m"),
            (Color::BrightYellow, "\x1b[93m"),
            (Color::BrightBlue, "\x1b[94m"),
            (Color::BrightMagenta, "\x1b[95m"),
            (Color::BrightCyan, "\x1b[96m"),
            (Color::White, "\x1b[97m"),
        ];

        for (color, expected) in test_cases {
            assert_eq!(color.style().to_string(), expected, "Failed for {:?}", color);
        }
    }

    #[test]
    fn bold_prefixes_weight_into_one_sequence() {
        assert_eq!(BOLD_RED.to_string(), "\x1b[1;31m");
        assert_eq!(BOLD_WHITE.to_string(), "\x1b[1;97m");
        assert_eq!(BOLD_DARK_GRAY.to_string(), "\x1b[1;90m");
    }

    #[test]
    fn bg_codes_offset_by_ten() {
        assert_eq!(BG_BLACK.to_string(), "\x1b[40m");
        assert_eq!(BG_GREEN.to_string(), "\x1b[42m");
        assert_eq!(BG_DARK_GRAY.to_string(), "\x1b[100m");
        assert_eq!(BG_WHITE.to_string(), "\x1b[107m");
    }

    #[test]
    fn composed_style_renders_bg_before_fg() {
        let style = WHITE.with_bg(Color::Green);
        assert_eq!(style.to_string(), "\x1b[42m\x1b[97m");
    }

    #[test]
    fn composed_bold_style_keeps_bg_first() {
        let style = BOLD_RED.with_bg(Color::BrightGreen);
        assert_eq!(style.to_string(), "\x1b[102m\x1b[1;31m");
    }

    #[test]
    fn empty_style_renders_nothing() {
        assert_eq!(Style::none().to_string(), "");
    }

    #[test]
    fn bold_without_fg_renders_weight_only() {
        let style = Style {
            bold: true,
            ..Style::none()
        };
        assert_eq!(style.to_string(), "\x1b[1m");
    }
}
