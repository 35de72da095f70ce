//! Fixed console geometry, cursor positioning, and screen clearing.
//!
//! The whole crate assumes the classic 120x30 console; the widgets position
//! themselves against these constants rather than probing the real terminal.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Assumed console width in columns.
pub const SCREEN_WIDTH: u16 = 120;

/// Assumed console height in rows.
pub const SCREEN_HEIGHT: u16 = 30;

/// Move the cursor to column `x`, row `y` (both 1-based).
///
/// Emits `ESC[y;xf` verbatim. Coordinates are not bounds-checked; the
/// terminal decides what an out-of-range position means.
pub fn goto_xy<W: Write>(out: &mut W, x: u16, y: u16) -> Result<()> {
    write!(out, "\x1b[{};{}f", y, x)?;
    Ok(())
}

/// Clear the screen and home the cursor.
pub fn clear_screen<W: Write>(out: &mut W) -> Result<()> {
    execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}
