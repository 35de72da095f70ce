//! Edit field rendering.

use std::io::Write;

use anyhow::Result;

use crate::render::boxes::{draw_box, SIMPLE_BORDER};
use crate::screen::goto_xy;
use crate::style::Style;
use crate::text::print_colored;

/// Width of the label box on the left.
const LABEL_BOX_WIDTH: u16 = 20;

/// Width of the input box on the right.
const INPUT_BOX_WIDTH: u16 = 100;

/// Draw a labeled input field: a 20-wide label box and a 100-wide input
/// box side by side starting at row `line`, with `text` inside the label
/// box.
///
/// This only paints the frames; reading the value is the prompt module's
/// job.
pub fn draw_edit_field<W: Write>(
    out: &mut W,
    text: &str,
    line: u16,
    box_style: Style,
    text_style: Style,
) -> Result<()> {
    draw_box(out, 1, line, LABEL_BOX_WIDTH, 3, box_style, SIMPLE_BORDER)?;
    draw_box(
        out,
        1 + LABEL_BOX_WIDTH,
        line,
        INPUT_BOX_WIDTH,
        3,
        box_style,
        SIMPLE_BORDER,
    )?;
    goto_xy(out, 2, line + 1)?;
    print_colored(out, text, text_style, "\n")
}
