//! Status bar rendering.
//!
//! The status bar owns the bottom three rows of the screen: a dark gray box
//! on rows 27-29 with left-aligned text on row 28. The text row is blanked
//! before writing so stale output never shows through. No trailing newline
//! is written; the next draw overwrites in place.

use std::io::Write;

use anyhow::Result;

use crate::render::boxes::{draw_box, SIMPLE_BORDER};
use crate::screen::{goto_xy, SCREEN_WIDTH};
use crate::style::{self, Style};
use crate::text::print_colored;

/// Row of the status box's top edge.
const STATUS_BOX_LINE: u16 = 27;

/// Row the status text is written on.
const STATUS_TEXT_LINE: u16 = 28;

/// Draw the status bar with `text` left-aligned in `text_style`.
pub fn print_status_bar<W: Write>(out: &mut W, text: &str, text_style: Style) -> Result<()> {
    goto_xy(out, 1, STATUS_TEXT_LINE)?;
    write!(out, "{}", " ".repeat(SCREEN_WIDTH as usize))?;
    draw_box(
        out,
        1,
        STATUS_BOX_LINE,
        SCREEN_WIDTH,
        3,
        style::DARK_GRAY,
        SIMPLE_BORDER,
    )?;
    goto_xy(out, 2, STATUS_TEXT_LINE)?;
    print_colored(out, text, text_style, "")
}

/// Status bar with a green `SUCCESS - ` prefix.
pub fn print_success<W: Write>(out: &mut W, text: &str) -> Result<()> {
    print_status_bar(out, &format!("SUCCESS - {}", text), style::GREEN)
}

/// Status bar with a bright cyan `INFO - ` prefix.
pub fn print_info<W: Write>(out: &mut W, text: &str) -> Result<()> {
    print_status_bar(out, &format!("INFO - {}", text), style::BRIGHT_CYAN)
}

/// Status bar with a yellow `WARNING - ` prefix.
pub fn print_warning<W: Write>(out: &mut W, text: &str) -> Result<()> {
    print_status_bar(out, &format!("WARNING - {}", text), style::YELLOW)
}

/// Status bar with a red `ERROR - ` prefix.
pub fn print_error<W: Write>(out: &mut W, text: &str) -> Result<()> {
    print_status_bar(out, &format!("ERROR - {}", text), style::RED)
}
