//! Title bar rendering.
//!
//! A title bar is a full-width 3-row box anchored at the top of the screen
//! with its text horizontally centered on the middle row. Text wider than
//! the box is not truncated; overflow is the caller's responsibility.

use std::io::Write;

use anyhow::Result;

use crate::render::boxes::{
    draw_box, BorderCharset, BROAD_BORDER, DOUBLE_BORDER, HEAVY_BORDER, ROUND_BORDER,
    SIMPLE_BORDER,
};
use crate::screen::{goto_xy, SCREEN_WIDTH};
use crate::style::Style;
use crate::text::print_colored;

/// Column at which a centered string of `len` characters starts.
fn centered_column(len: usize) -> u16 {
    let half = (len / 2) as u16;
    (SCREEN_WIDTH / 2).saturating_sub(half).max(1)
}

fn title_bar<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
    charset: BorderCharset,
) -> Result<()> {
    draw_box(out, 1, 1, SCREEN_WIDTH, 3, box_style, charset)?;
    goto_xy(out, centered_column(text.chars().count()), 2)?;
    print_colored(out, text, text_style, "\n")
}

/// Draw the title bar with a thin single-line border.
pub fn print_title_bar<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    title_bar(out, text, box_style, text_style, SIMPLE_BORDER)
}

/// Draw the title bar with a double-line border.
pub fn print_title_bar_double_border<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    title_bar(out, text, box_style, text_style, DOUBLE_BORDER)
}

/// Draw the title bar with a half-block border.
pub fn print_title_bar_broad_border<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    title_bar(out, text, box_style, text_style, BROAD_BORDER)
}

/// Draw the title bar with a thick single-line border.
pub fn print_title_bar_heavy_border<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    title_bar(out, text, box_style, text_style, HEAVY_BORDER)
}

/// Draw the title bar with rounded corners.
pub fn print_title_bar_round_border<W: Write>(
    out: &mut W,
    text: &str,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    title_bar(out, text, box_style, text_style, ROUND_BORDER)
}
