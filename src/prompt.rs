//! Blocking line-input helpers.
//!
//! Every helper reads whole lines from a `BufRead` and writes its prompt
//! (and any validation message) to a `Write`, so interactive callers pass
//! locked stdin/stdout and tests drive them with in-memory buffers.
//!
//! The validation loops retry without bound: an empty or unparsable line
//! paints a status-bar error and asks again. That contract is deliberate;
//! on a live terminal the loop ends when the user cooperates. A reader
//! that reaches end of input can never satisfy a loop, so that one case
//! surfaces as [`PromptError::StreamClosed`] instead of spinning.

use std::io::{BufRead, Write};

use crate::render::print_error;
use crate::screen::goto_xy;

/// Errors surfaced by the prompt helpers.
///
/// Empty input and parse failures are not errors; they are handled by
/// re-prompting and never reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input stream closed before a value was read")]
    StreamClosed,

    #[error("failed to write prompt: {0}")]
    Render(anyhow::Error),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Read one line, stripping the trailing newline.
fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::StreamClosed);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Position the cursor at `(x, y)`, print `prompt`, and read one line.
///
/// The line is returned verbatim (minus the line terminator), including
/// the empty string.
pub fn read_line_at<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    x: u16,
    y: u16,
    prompt: &str,
) -> Result<String, PromptError> {
    goto_xy(out, x, y).map_err(PromptError::Render)?;
    write!(out, "{}", prompt)?;
    out.flush()?;
    read_line(input)
}

/// Like [`read_line_at`], but re-prompts until the line is non-empty.
///
/// Retries are unbounded.
pub fn require_line_at<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    x: u16,
    y: u16,
    prompt: &str,
) -> Result<String, PromptError> {
    loop {
        let value = read_line_at(input, out, x, y, prompt)?;
        if !value.is_empty() {
            return Ok(value);
        }
    }
}

/// Prompt without positioning, re-prompting until the line is non-empty.
///
/// Each empty attempt paints a status-bar error before asking again.
pub fn require_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    loop {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let value = read_line(input)?;
        if value.is_empty() {
            print_error(out, "Invalid Input, Try Again...").map_err(PromptError::Render)?;
        } else {
            return Ok(value);
        }
    }
}

/// Prompt at `(x, y)` until the line parses as an integer.
///
/// Any malformed line (empty, non-numeric, out of range) paints a
/// status-bar error and re-prompts; no distinction is surfaced.
pub fn read_int_at<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    x: u16,
    y: u16,
    prompt: &str,
) -> Result<i64, PromptError> {
    loop {
        let line = read_line_at(input, out, x, y, prompt)?;
        match line.trim().parse::<i64>() {
            Ok(value) => return Ok(value),
            Err(_) => print_error(out, "Input data must be an integer number...")
                .map_err(PromptError::Render)?,
        }
    }
}

/// Prompt at `(x, y)` until the line parses as a float.
pub fn read_float_at<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    x: u16,
    y: u16,
    prompt: &str,
) -> Result<f64, PromptError> {
    loop {
        let line = read_line_at(input, out, x, y, prompt)?;
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => print_error(out, "Input data must be a floating point number...")
                .map_err(PromptError::Render)?,
        }
    }
}
