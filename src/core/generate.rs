use crate::core::layout::{Warning, layout};
use crate::core::schedule::ScheduleModel;
use crate::errors::{AppError, AppResult};
use crate::export::render;
use crate::models::day::Weekday;
use crate::models::options::{DEFAULT_TERM, ScheduleOptions};

/// What the caller asks for when printing a schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub days: Vec<Weekday>,
    /// End of the printed window, e.g. `"6 PM"` or `"20:00"`.
    pub day_end: String,
    pub owner_label: String,
    pub term: String,
}

impl GenerateRequest {
    pub fn new(days: &[Weekday], day_end: &str, owner_label: &str) -> Self {
        Self {
            days: days.to_vec(),
            day_end: day_end.to_string(),
            owner_label: owner_label.to_string(),
            term: DEFAULT_TERM.to_string(),
        }
    }

    pub fn term(mut self, term: &str) -> Self {
        self.term = term.to_string();
        self
    }

    pub fn options(&self) -> AppResult<ScheduleOptions> {
        ScheduleOptions::new(&self.days, &self.day_end, &self.owner_label, &self.term)
    }
}

/// A finished document plus everything that was clipped or left out.
#[derive(Debug, Clone)]
pub struct Generated {
    pub bytes: Vec<u8>,
    pub warnings: Vec<Warning>,
}

/// Validate the request, snapshot the events, lay them out and render the page.
///
/// Either the whole document comes back or an error does; nothing partial.
pub fn generate(model: &ScheduleModel, request: &GenerateRequest) -> AppResult<Generated> {
    if model.is_empty() {
        return Err(AppError::EmptySchedule("add at least one event".into()));
    }
    let options = request.options()?;

    let snapshot = model.snapshot(options);
    let page = layout(&snapshot);
    let bytes = render(&page, &snapshot.options)?;

    Ok(Generated {
        bytes,
        warnings: page.warnings,
    })
}

impl ScheduleModel {
    pub fn generate(&self, request: &GenerateRequest) -> AppResult<Generated> {
        generate(self, request)
    }
}
