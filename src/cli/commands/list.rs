use crate::cli::commands::{load_schedule, schedule_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{colorize_optional, swatch};
use crate::utils::describe_event_time;
use crate::utils::formatting::ellipsize;
use crate::utils::table::Table;

const MAX_TITLE: usize = 32;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { file, json } = cmd {
        let path = schedule_path(file);
        let (_, model) = load_schedule(&path, cfg)?;

        if *json {
            let out = serde_json::to_string_pretty(model.list_events())
                .map_err(|e| AppError::ScheduleFile(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        if model.is_empty() {
            println!("No events in {}", path.display());
            return Ok(());
        }

        header(format!("{} event(s) in {}", model.len(), path.display()));

        let mut table = Table::new(&["ID", "WHEN", "TITLE", "LOCATION", "COLOR"]);
        for e in model.list_events() {
            table.add_row(vec![
                e.id.to_string(),
                describe_event_time(e),
                ellipsize(&e.title, MAX_TITLE),
                colorize_optional(e.location.as_deref().unwrap_or("")),
                format!("{} {}", swatch(e.color.resolve()), e.color),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
