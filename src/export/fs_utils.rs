// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Checks whether the output file may be created or replaced.
///
/// - file missing → Ok
/// - file present and `force` → Ok
/// - file present, no `force` → ask on an interactive terminal, refuse otherwise
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if !io::stdin().is_terminal() {
        return Err(AppError::from(io::Error::other(
            "output file exists; use --force to overwrite",
        )));
    }

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::from(io::Error::other(
            "Generation cancelled: existing file not overwritten",
        )))
    }
}
