//! Dialog components for TUI

mod base;
mod submission_dialog;

pub use submission_dialog::render_page_dialog;
