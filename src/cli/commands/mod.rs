pub mod add;
pub mod config;
pub mod del;
pub mod generate;
pub mod init;
pub mod list;

use crate::config::Config;
use crate::core::schedule::ScheduleModel;
use crate::errors::AppResult;
use crate::models::schedule_file::ScheduleFile;
use crate::utils::path::expand_tilde;
use std::path::{Path, PathBuf};

/// Read a schedule file and validate every entry through the model.
pub(crate) fn load_schedule(
    path: &Path,
    cfg: &Config,
) -> AppResult<(ScheduleFile, ScheduleModel)> {
    let file = ScheduleFile::load(path)?;
    let model = ScheduleModel::from_entries(&file.events, cfg.color()?)?;
    Ok((file, model))
}

pub(crate) fn schedule_path(file: &str) -> PathBuf {
    expand_tilde(file)
}
