use crate::cli::commands::{load_schedule, schedule_path};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::generate::GenerateRequest;
use crate::errors::AppResult;
use crate::export::save_pdf;
use crate::ui::messages::{info, layout_warnings};
use crate::utils::path::expand_tilde;

/// Generate the PDF. Options resolve as: CLI flag > schedule file > config.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        file,
        out,
        days,
        end,
        owner,
        term,
        force,
    } = cmd
    {
        let path = schedule_path(file);
        let (schedule, model) = load_schedule(&path, cfg)?;

        let days = days
            .clone()
            .or_else(|| schedule.days.clone())
            .unwrap_or_else(|| cfg.days.clone());
        let day_end = end
            .clone()
            .or_else(|| schedule.day_end.clone())
            .unwrap_or_else(|| cfg.day_end.clone());
        let owner = owner
            .clone()
            .or_else(|| schedule.owner.clone())
            .unwrap_or_else(|| cfg.owner_label.clone());
        let term = term
            .clone()
            .or_else(|| schedule.term.clone())
            .unwrap_or_else(|| cfg.term.clone());

        let request = GenerateRequest::new(&days, &day_end, &owner).term(&term);
        info(format!(
            "Generating {} event(s) for {} day(s), 8:00 AM to {}",
            model.len(),
            request.days.len(),
            day_end
        ));

        let generated = model.generate(&request)?;
        layout_warnings(&generated.warnings);

        save_pdf(&generated.bytes, &expand_tilde(out), *force)?;
    }
    Ok(())
}
