use super::{color::Color, day::Weekday, time::CanonicalTime};
use serde::Serialize;
use std::fmt;

/// Identifier handed out by the schedule model, in insertion order starting from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated calendar block, always with `start < end`. Only the schedule
/// model creates these and they are never changed afterwards: an edit is a
/// remove followed by an add.
///
/// ```compile_fail
/// use rschedule::models::event::{Event, EventId};
/// use rschedule::parse_time;
///
/// let backwards = Event {
///     id: EventId(1),
///     title: "Backwards".into(),
///     day: rschedule::models::day::Weekday::Mon,
///     start: parse_time("10:00").unwrap(),
///     end: parse_time("9:00").unwrap(),
///     location: None,
///     color: Default::default(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub(crate) id: EventId,
    pub(crate) title: String,
    pub(crate) day: Weekday,
    pub(crate) start: CanonicalTime,
    pub(crate) end: CanonicalTime,
    pub(crate) location: Option<String>,
    pub(crate) color: Color,
}

impl Event {
    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    pub fn start(&self) -> CanonicalTime {
        self.start
    }

    pub fn end(&self) -> CanonicalTime {
        self.end
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// `9:00 AM - 11:00 AM`
    pub fn time_range_12h(&self) -> String {
        format!("{} - {}", self.start.to_12h(), self.end.to_12h())
    }
}

/// Raw, user-entered fields for a new event, before any validation.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub title: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub location: Option<String>,
    pub color: Option<String>,
}

impl NewEvent {
    pub fn new(title: &str, day: &str, start: &str, end: &str) -> Self {
        Self {
            title: title.to_string(),
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            location: None,
            color: None,
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.location = Some(location.to_string());
        self
    }

    pub fn color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}
