//! Widget rendering.
//!
//! Every function here draws blindly into a writer: no retained state, no
//! damage tracking. Callers compose widgets by calling them in paint order.

mod boxes;
mod field;
mod progress;
mod status;
mod title;

pub use boxes::{
    draw_box, draw_broad_border_box, draw_double_border_box, draw_heavy_border_box,
    draw_round_border_box, draw_simple_border_box, BorderCharset, BROAD_BORDER, DOUBLE_BORDER,
    HEAVY_BORDER, ROUND_BORDER, SIMPLE_BORDER,
};
pub use field::draw_edit_field;
pub use progress::print_progress_bar;
pub use status::{print_error, print_info, print_status_bar, print_success, print_warning};
pub use title::{
    print_title_bar, print_title_bar_broad_border, print_title_bar_double_border,
    print_title_bar_heavy_border, print_title_bar_round_border,
};
