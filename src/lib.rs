//! Terminal presentation primitives for a fixed 120x30 console.
//!
//! `termpanel` draws directly with ANSI escape sequences: colored text,
//! cursor positioning, bordered boxes, and composite widgets (title bar,
//! progress bar, status bar, edit field), plus blocking line-input helpers
//! with validation loops.
//!
//! Every function is stateless and writes into any [`std::io::Write`];
//! nothing is retained between calls, and the terminal is assumed to be a
//! single cooperatively shared 120x30 grid.
//!
//! # Usage
//!
//! ```no_run
//! use std::io::{stdin, stdout};
//! use termpanel::prompt::read_int_at;
//! use termpanel::render::{print_progress_bar, print_title_bar};
//! use termpanel::style::{Color, GREEN, WHITE};
//!
//! let mut out = stdout().lock();
//! print_title_bar(&mut out, "Setup", WHITE, GREEN)?;
//! print_progress_bar(&mut out, 42.0, 10, WHITE, GREEN, WHITE, Color::Green)?;
//! let port = read_int_at(&mut stdin().lock(), &mut out, 2, 12, "Port: ")?;
//! # let _ = port;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod prompt;
pub mod render;
pub mod screen;
pub mod style;
pub mod text;

pub use prompt::PromptError;
pub use render::BorderCharset;
pub use screen::{clear_screen, goto_xy, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use style::{Color, Style, RESET};
pub use text::{print_colored, trim_text};
