// src/export/mod.rs

mod fs_utils;
pub mod pdf;
mod pdf_export;

pub use pdf::{render, render_to};
pub use pdf_export::save_pdf;

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for written documents.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} schedule saved: {}", path.display()));
}
