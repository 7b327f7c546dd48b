use crate::cli::commands::{load_schedule, schedule_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventId;
use crate::ui::messages::info;

/// Delete an event from a schedule file by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { file, id } = cmd {
        let path = schedule_path(file);
        let (mut schedule, mut model) = load_schedule(&path, cfg)?;

        let id = EventId(*id);
        let idx = model.index_of(id).ok_or(AppError::NotFound(id))?;
        let removed = model.remove_event(id)?;
        schedule.events.remove(idx);
        schedule.save(&path)?;

        info(format!(
            "Deleted event #{} '{}' ({} {})",
            removed.id,
            removed.title,
            removed.day,
            removed.time_range_12h()
        ));
    }
    Ok(())
}
