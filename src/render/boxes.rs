//! Border charsets and box drawing.
//!
//! A box is drawn cell by cell: every perimeter cell gets a cursor move and
//! a styled glyph, interior cells are never touched (not cleared, not
//! overwritten). Callers that need a blank interior must clear it themselves.

use std::io::Write;

use anyhow::Result;

use crate::screen::goto_xy;
use crate::style::{Style, RESET};

/// The eight glyphs of one border style, positionally meaningful.
///
/// Order: top-left, bottom-left, left edge, top-right, right edge,
/// bottom-right, top edge, bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderCharset(pub [char; 8]);

impl BorderCharset {
    pub fn top_left(&self) -> char {
        self.0[0]
    }

    pub fn bottom_left(&self) -> char {
        self.0[1]
    }

    pub fn left(&self) -> char {
        self.0[2]
    }

    pub fn top_right(&self) -> char {
        self.0[3]
    }

    pub fn right(&self) -> char {
        self.0[4]
    }

    pub fn bottom_right(&self) -> char {
        self.0[5]
    }

    pub fn top(&self) -> char {
        self.0[6]
    }

    pub fn bottom(&self) -> char {
        self.0[7]
    }
}

pub const SIMPLE_BORDER: BorderCharset =
    BorderCharset(['┌', '└', '│', '┐', '│', '┘', '─', '─']);
pub const HEAVY_BORDER: BorderCharset =
    BorderCharset(['┏', '┗', '┃', '┓', '┃', '┛', '━', '━']);
pub const DOUBLE_BORDER: BorderCharset =
    BorderCharset(['╔', '╚', '║', '╗', '║', '╝', '═', '═']);
pub const BROAD_BORDER: BorderCharset =
    BorderCharset(['▛', '▙', '▌', '▜', '▐', '▟', '▀', '▄']);
pub const ROUND_BORDER: BorderCharset =
    BorderCharset(['╭', '╰', '│', '╮', '│', '╯', '─', '─']);

/// Draw a `w` x `h` box with its top-left corner at `(x, y)` (1-based).
///
/// Degenerate boxes (`w <= 1` or `h <= 1`) draw nothing. Iteration is
/// column-major to match the glyph emission order consumers see on the
/// wire: for each perimeter cell, a cursor move, the style, one glyph,
/// and a reset.
pub fn draw_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
    charset: BorderCharset,
) -> Result<()> {
    if w <= 1 || h <= 1 {
        return Ok(());
    }

    for i in x..x + w {
        for j in y..y + h {
            let glyph = if i == x {
                if j == y {
                    charset.top_left()
                } else if j == y + h - 1 {
                    charset.bottom_left()
                } else {
                    charset.left()
                }
            } else if i == x + w - 1 {
                if j == y {
                    charset.top_right()
                } else if j == y + h - 1 {
                    charset.bottom_right()
                } else {
                    charset.right()
                }
            } else if j == y {
                charset.top()
            } else if j == y + h - 1 {
                charset.bottom()
            } else {
                continue; // interior cell
            };
            goto_xy(out, i, j)?;
            write!(out, "{}{}{}", style, glyph, RESET)?;
        }
    }

    Ok(())
}

/// Draw a box with the thin single-line border.
pub fn draw_simple_border_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
) -> Result<()> {
    draw_box(out, x, y, w, h, style, SIMPLE_BORDER)
}

/// Draw a box with the thick single-line border.
pub fn draw_heavy_border_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
) -> Result<()> {
    draw_box(out, x, y, w, h, style, HEAVY_BORDER)
}

/// Draw a box with the double-line border.
pub fn draw_double_border_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
) -> Result<()> {
    draw_box(out, x, y, w, h, style, DOUBLE_BORDER)
}

/// Draw a box with the half-block border.
pub fn draw_broad_border_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
) -> Result<()> {
    draw_box(out, x, y, w, h, style, BROAD_BORDER)
}

/// Draw a box with rounded corners.
pub fn draw_round_border_box<W: Write>(
    out: &mut W,
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    style: Style,
) -> Result<()> {
    draw_box(out, x, y, w, h, style, ROUND_BORDER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    fn rendered(x: u16, y: u16, w: u16, h: u16) -> String {
        let mut buf = Vec::new();
        draw_box(&mut buf, x, y, w, h, style::WHITE, SIMPLE_BORDER).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn charsets_have_eight_glyphs() {
        for charset in [
            SIMPLE_BORDER,
            HEAVY_BORDER,
            DOUBLE_BORDER,
            BROAD_BORDER,
            ROUND_BORDER,
        ] {
            assert_eq!(charset.0.len(), 8);
        }
    }

    #[test]
    fn degenerate_width_draws_nothing() {
        assert!(rendered(1, 1, 1, 5).is_empty());
        assert!(rendered(1, 1, 0, 5).is_empty());
    }

    #[test]
    fn degenerate_height_draws_nothing() {
        assert!(rendered(1, 1, 5, 1).is_empty());
        assert!(rendered(1, 1, 5, 0).is_empty());
    }

    #[test]
    fn perimeter_cell_count_matches_geometry() {
        // Every glyph write is preceded by exactly one cursor move.
        let out = rendered(1, 1, 6, 4);
        let moves = out.matches('\x1b').count();
        // Each cell emits: move + style + reset = 3 escapes.
        let cells = moves / 3;
        assert_eq!(cells, 2 * 6 + 2 * 4 - 4);
    }

    #[test]
    fn minimal_box_is_four_corners() {
        let out = rendered(3, 5, 2, 2);
        assert!(out.contains("\x1b[5;3f"));
        assert!(out.contains('┌'));
        assert!(out.contains('┐'));
        assert!(out.contains('└'));
        assert!(out.contains('┘'));
        assert_eq!(out.matches('\x1b').count() / 3, 4);
    }

    #[test]
    fn interior_cells_are_skipped() {
        // A 4x4 box at (1,1): cell (2,2) is interior, no move targets it.
        let out = rendered(1, 1, 4, 4);
        assert!(!out.contains("\x1b[2;2f"));
        assert!(!out.contains("\x1b[3;3f"));
    }

    #[test]
    fn corner_and_edge_glyphs_land_at_their_positions() {
        let out = rendered(1, 1, 3, 3);
        // Column-major emission: left column first.
        let expected = "\x1b[1;1f\x1b[97m┌\x1b[0m\
                        \x1b[2;1f\x1b[97m│\x1b[0m\
                        \x1b[3;1f\x1b[97m└\x1b[0m\
                        \x1b[1;2f\x1b[97m─\x1b[0m\
                        \x1b[3;2f\x1b[97m─\x1b[0m\
                        \x1b[1;3f\x1b[97m┐\x1b[0m\
                        \x1b[2;3f\x1b[97m│\x1b[0m\
                        \x1b[3;3f\x1b[97m┘\x1b[0m";
        assert_eq!(out, expected);
    }

    #[test]
    fn shortcut_fixes_the_charset() {
        let mut buf = Vec::new();
        draw_double_border_box(&mut buf, 1, 1, 2, 2, style::WHITE).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains('╔'));
        assert!(out.contains('╝'));
        assert!(!out.contains('┌'));
    }
}
