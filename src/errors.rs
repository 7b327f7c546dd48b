//! Unified application error type.
//! Parser, model, layout, renderer and CLI all return AppError so the
//! caller can re-prompt the user with a single, readable message.

use crate::models::event::EventId;
use crate::models::time::CanonicalTime;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which part of a time string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hour,
    Minute,
    Meridiem,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeField::Hour => "hour",
            TimeField::Minute => "minute",
            TimeField::Meridiem => "meridiem",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid time format '{input}': invalid {field}. Try formats like '9:30 AM', '14:30', '2 PM'")]
    InvalidTimeFormat { input: String, field: TimeField },

    #[error("Invalid day: {0} (use mon, tue, wed, thu or fri)")]
    InvalidDay(String),

    #[error("Invalid color: {0} (use a preset name or #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid schedule end time: {0} (choose a whole hour from 6 PM to 11 PM)")]
    InvalidDayEnd(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Start time {start} must be before end time {end}")]
    InvalidTimeRange {
        start: CanonicalTime,
        end: CanonicalTime,
    },

    #[error("Nothing to generate: {0}")]
    EmptySchedule(String),

    #[error("No event with id {0}")]
    NotFound(EventId),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("PDF render error: {0}")]
    Render(String),

    // ---------------------------
    // Input / config files
    // ---------------------------
    #[error("Schedule file error: {0}")]
    ScheduleFile(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
