//! Text utilities for splitting and formatting table lines

mod format;
mod splitter;

pub use format::{format_g, format_g_unpadded};
pub use splitter::{comment_boundary, count_separators, split_in_place};
