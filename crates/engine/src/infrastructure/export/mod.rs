//! Human-readable exports.

mod text_exporter;

pub use text_exporter::{export_text, render_text};
