//! Progress bar rendering.
//!
//! A full-width 3-row bar: a box, a solid-block fill proportional to the
//! percentage, and the percentage printed as text near the middle. Label
//! characters that fall inside the filled region get the overlap background
//! so they stay readable on top of the blocks.

use std::io::Write;

use anyhow::Result;

use crate::render::boxes::{draw_box, SIMPLE_BORDER};
use crate::screen::{goto_xy, SCREEN_WIDTH};
use crate::style::{Color, Style};
use crate::text::print_colored;

/// Width of the fillable interior (the box minus its two border columns).
const BAR_INTERIOR_WIDTH: f64 = 118.0;

/// Column at which the percentage label starts.
const LABEL_COLUMN: u16 = 58;

/// Highest row a bar may start on and still fit above the status bar.
const MAX_BAR_LINE: i32 = 27;

/// Number of filled columns for a clamped percentage.
fn filled_columns(percentage: f64) -> u16 {
    ((percentage / 100.0) * BAR_INTERIOR_WIDTH) as u16
}

/// Draw a progress bar anchored at `(1, line)`.
///
/// A no-op when `line` is negative or below the status bar area
/// (`line > 27`). `percentage` is clamped to `[0, 100]` before the fill
/// width is computed.
///
/// # Arguments
/// * `out` - The writer to render to
/// * `percentage` - Progress value, clamped to 0..=100
/// * `line` - Row of the box's top edge (1-based)
/// * `box_style` - Style of the border
/// * `bar_style` - Style of the solid fill blocks
/// * `text_style` - Style of the percentage label
/// * `overlap_bg` - Background layered under label characters that sit on
///   the filled region
pub fn print_progress_bar<W: Write>(
    out: &mut W,
    percentage: f64,
    line: i32,
    box_style: Style,
    bar_style: Style,
    text_style: Style,
    overlap_bg: Color,
) -> Result<()> {
    if !(0..=MAX_BAR_LINE).contains(&line) {
        return Ok(());
    }
    let line = line as u16;
    let percentage = percentage.clamp(0.0, 100.0);

    draw_box(out, 1, line, SCREEN_WIDTH, 3, box_style, SIMPLE_BORDER)?;

    let pins = filled_columns(percentage);
    for i in 0..pins {
        goto_xy(out, i + 2, line + 1)?;
        print_colored(out, "█", bar_style, "\n")?;
    }

    let label = format!("{:.2}%", percentage);
    let mut glyph = [0u8; 4];
    for (j, c) in label.chars().enumerate() {
        let col = LABEL_COLUMN + j as u16;
        goto_xy(out, col, line + 1)?;
        let style = if pins < col {
            text_style
        } else {
            text_style.with_bg(overlap_bg)
        };
        print_colored(out, c.encode_utf8(&mut glyph), style, "\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    fn rendered(percentage: f64, line: i32) -> String {
        let mut buf = Vec::new();
        print_progress_bar(
            &mut buf,
            percentage,
            line,
            style::WHITE,
            style::GREEN,
            style::WHITE,
            Color::Green,
        )
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn filled_columns_scales_against_interior_width() {
        assert_eq!(filled_columns(0.0), 0);
        assert_eq!(filled_columns(50.0), 59);
        assert_eq!(filled_columns(100.0), 118);
    }

    #[test]
    fn filled_columns_floors_fractions() {
        assert_eq!(filled_columns(1.0), 1); // 1.18
        assert_eq!(filled_columns(0.5), 0); // 0.59
        assert_eq!(filled_columns(99.9), 117); // 117.882
    }

    #[test]
    fn zero_percent_has_no_fill() {
        let out = rendered(0.0, 5);
        assert_eq!(out.matches('█').count(), 0);
    }

    #[test]
    fn full_bar_fills_the_interior() {
        let out = rendered(100.0, 5);
        assert_eq!(out.matches('█').count(), 118);
    }

    #[test]
    fn overshoot_clamps_to_full() {
        assert_eq!(rendered(150.0, 5), rendered(100.0, 5));
    }

    #[test]
    fn undershoot_clamps_to_empty() {
        assert_eq!(rendered(-20.0, 5), rendered(0.0, 5));
    }

    #[test]
    fn out_of_range_line_is_a_no_op() {
        assert!(rendered(50.0, -1).is_empty());
        assert!(rendered(50.0, 28).is_empty());
    }

    #[test]
    fn boundary_lines_still_draw() {
        assert!(!rendered(50.0, 0).is_empty());
        assert!(!rendered(50.0, 27).is_empty());
    }

    #[test]
    fn label_shows_two_decimals() {
        let out = rendered(42.5, 5);
        for c in "42.50%".chars() {
            assert!(out.contains(c), "missing label char {:?}", c);
        }
    }

    #[test]
    fn label_chars_on_the_fill_get_the_overlap_background() {
        // 100%: the whole label sits on the fill, every char carries the
        // background code before its foreground.
        let out = rendered(100.0, 5);
        assert!(out.contains("\x1b[42m\x1b[97m1"));
        // 0%: no fill, label is plain foreground.
        let out = rendered(0.0, 5);
        assert!(!out.contains("\x1b[42m\x1b[97m"));
    }

    #[test]
    fn label_lands_at_its_fixed_column() {
        let out = rendered(0.0, 5);
        assert!(out.contains("\x1b[6;58f"));
    }
}
