// src/export/pdf_export.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an already rendered PDF to `path`, asking before overwriting unless `force`.
pub fn save_pdf(bytes: &[u8], path: &Path, force: bool) -> AppResult<()> {
    ensure_writable(path, force)?;
    info(format!("Writing PDF schedule: {}", path.display()));

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(bytes)?;
    out.flush()?;

    notify_export_success("PDF", path);
    Ok(())
}
