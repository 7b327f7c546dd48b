use crate::errors::{AppError, AppResult};
use crate::models::color::Color;
use crate::models::day::Weekday;
use crate::models::event::{Event, EventId, NewEvent};
use crate::models::options::ScheduleOptions;
use crate::models::schedule_file::EventEntry;
use crate::utils::time::parse_time;

/// The live, editable set of events behind the entry surface.
///
/// Events keep insertion order so list displays stay stable. Duplicates are
/// allowed: a weekly block entered twice is simply two events.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    events: Vec<Event>,
    next_id: u32,
    default_color: Color,
}

impl Default for ScheduleModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleModel {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            next_id: 1,
            default_color: Color::default(),
        }
    }

    /// Color given to events entered without one.
    pub fn with_default_color(mut self, color: Color) -> Self {
        self.default_color = color;
        self
    }

    /// Validate the raw fields and append the resulting event.
    ///
    /// Times are parsed first, then `start < end` is enforced. Whether the
    /// event fits the printed window is not checked here; layout clips or
    /// omits it and reports a warning instead.
    pub fn add_event(&mut self, fields: NewEvent) -> AppResult<Event> {
        let title = fields.title.trim();
        if title.is_empty() {
            return Err(AppError::MissingField("title"));
        }
        if fields.day.trim().is_empty() {
            return Err(AppError::MissingField("day"));
        }
        if fields.start.trim().is_empty() {
            return Err(AppError::MissingField("start time"));
        }
        if fields.end.trim().is_empty() {
            return Err(AppError::MissingField("end time"));
        }

        let day = Weekday::from_code(&fields.day)
            .ok_or_else(|| AppError::InvalidDay(fields.day.trim().to_string()))?;

        let start = parse_time(&fields.start)?;
        let end = parse_time(&fields.end)?;
        if start >= end {
            return Err(AppError::InvalidTimeRange { start, end });
        }

        let color = match fields.color.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => {
                Color::parse(c).ok_or_else(|| AppError::InvalidColor(c.to_string()))?
            }
            _ => self.default_color,
        };

        let location = fields
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let event = Event {
            id: EventId(self.next_id),
            title: title.to_string(),
            day,
            start,
            end,
            location,
            color,
        };
        self.next_id += 1;
        self.events.push(event.clone());
        Ok(event)
    }

    pub fn remove_event(&mut self, id: EventId) -> AppResult<Event> {
        let idx = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or(AppError::NotFound(id))?;
        Ok(self.events.remove(idx))
    }

    /// Events in insertion order.
    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Position of an event in insertion order.
    pub fn index_of(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }

    /// Build a model from stored entries; the first bad entry aborts with its 1-based index.
    pub fn from_entries(entries: &[EventEntry], default_color: Color) -> AppResult<Self> {
        let mut model = ScheduleModel::new().with_default_color(default_color);
        for (i, entry) in entries.iter().enumerate() {
            model.add_event(NewEvent::from(entry)).map_err(|e| {
                AppError::ScheduleFile(format!("event #{} ('{}'): {e}", i + 1, entry.title))
            })?;
        }
        Ok(model)
    }

    /// Freeze the current events together with the generation options.
    pub fn snapshot(&self, options: ScheduleOptions) -> Snapshot {
        Snapshot {
            events: self.events.clone(),
            options,
        }
    }
}

/// Immutable input of one generation call: a copy of the events plus options.
/// Only [`ScheduleModel::snapshot`] builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub(crate) events: Vec<Event>,
    pub(crate) options: ScheduleOptions,
}

impl Snapshot {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }
}
