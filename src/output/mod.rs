//! Console output.
//!
//! - [`terminal`] - per-lab summary with colors

mod terminal;

pub use terminal::{format_field, lab_summary_lines, print_lab_summary};
