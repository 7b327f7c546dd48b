use crate::cli::commands::schedule_path;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleModel;
use crate::errors::AppResult;
use crate::models::event::NewEvent;
use crate::models::schedule_file::{EventEntry, ScheduleFile};
use crate::ui::messages::success;

/// Add an event to a schedule file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        file,
        title,
        day,
        start,
        end,
        location,
        color,
    } = cmd
    {
        let path = schedule_path(file);

        //
        // 1. Load existing entries (missing file = empty schedule)
        //
        let mut schedule = ScheduleFile::load_or_default(&path)?;
        let mut model = ScheduleModel::from_entries(&schedule.events, cfg.color()?)?;

        //
        // 2. Validate the new entry through the model
        //
        let fields = NewEvent {
            title: title.clone(),
            day: day.clone(),
            start: start.clone(),
            end: end.clone(),
            location: location.clone(),
            color: color.clone(),
        };
        let event = model.add_event(fields.clone())?;

        //
        // 3. Persist the user's text, not the normalized values
        //
        schedule.events.push(EventEntry::from(&fields));
        schedule.save(&path)?;

        success(format!(
            "Added event #{} '{}' on {} {} ({})",
            event.id,
            event.title,
            event.day,
            event.time_range_12h(),
            path.display()
        ));
    }

    Ok(())
}
