use super::{day::Weekday, time::CanonicalTime};
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;

/// Every page starts at 08:00.
pub const DAY_START: CanonicalTime = CanonicalTime(8 * 60);

/// Allowed page end hours: 6 PM through 11 PM.
pub const DAY_END_HOURS: std::ops::RangeInclusive<u16> = 18..=23;

pub const DEFAULT_TERM: &str = "Fall 2025";

pub const FOOTER_CAPTION: &str = "Please knock if door is closed during office hours";

/// Generation options for one PDF request. Built only through
/// [`ScheduleOptions::new`], so `day_start < day_end` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOptions {
    /// Sorted Monday..Friday, no duplicates, never empty.
    pub(crate) selected_days: Vec<Weekday>,
    pub(crate) day_start: CanonicalTime,
    pub(crate) day_end: CanonicalTime,
    pub(crate) owner_label: String,
    pub(crate) term: String,
}

impl ScheduleOptions {
    /// Validates the day selection and the end-of-day text (`"6 PM"`, `"20:00"`, ...).
    pub fn new(
        days: &[Weekday],
        day_end_text: &str,
        owner_label: &str,
        term: &str,
    ) -> AppResult<Self> {
        let mut selected_days = days.to_vec();
        selected_days.sort();
        selected_days.dedup();

        if selected_days.is_empty() {
            return Err(AppError::EmptySchedule("no days selected".into()));
        }

        let day_end = parse_day_end(day_end_text)?;

        Ok(Self {
            selected_days,
            day_start: DAY_START,
            day_end,
            owner_label: owner_label.trim().to_string(),
            term: term.trim().to_string(),
        })
    }

    /// Header line, e.g. `Fall 2025 Schedule - Dr. Jane Doe`.
    pub fn title(&self) -> String {
        let mut title = if self.term.is_empty() {
            "Schedule".to_string()
        } else {
            format!("{} Schedule", self.term)
        };
        if !self.owner_label.is_empty() {
            title.push_str(" - ");
            title.push_str(&self.owner_label);
        }
        title
    }

    pub fn selected_days(&self) -> &[Weekday] {
        &self.selected_days
    }

    pub fn day_start(&self) -> CanonicalTime {
        self.day_start
    }

    pub fn day_end(&self) -> CanonicalTime {
        self.day_end
    }

    pub fn owner_label(&self) -> &str {
        &self.owner_label
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn window_minutes(&self) -> u16 {
        self.day_end.minutes().saturating_sub(self.day_start.minutes())
    }
}

pub fn parse_day_end(text: &str) -> AppResult<CanonicalTime> {
    let t = parse_time(text)?;
    if !t.is_whole_hour() || !DAY_END_HOURS.contains(&t.hour()) {
        return Err(AppError::InvalidDayEnd(text.trim().to_string()));
    }
    Ok(t)
}
