//! Presentation of projection results

mod format;
mod render;
pub mod export;

pub use format::{format_general, format_num};
pub use render::{format_result, overflow_message, render_report};
pub use export::{write_csv, write_json, write_output, OutputFormat, ProjectionReport};
