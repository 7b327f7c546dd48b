//! Time utilities: tolerant parsing of human time notations into minutes since midnight.
//!
//! Accepted forms (case is ignored, leading zeros are fine, blanks may surround
//! the separator and precede the meridiem but never split a number):
//! `H`, `HH`, `H:MM`, `HH:MM` on a 24-hour scale, and `H AM`, `H:MM PM` on a
//! 12-hour scale. A dot may replace the colon (`12.55`, `2.30 PM`).

use crate::errors::{AppError, AppResult, TimeField};
use crate::models::time::CanonicalTime;
use regex::Regex;
use std::sync::LazyLock;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<hour>\d+)(?:\s*[:.]\s*(?P<minute>\d+))?\s*(?P<meridiem>[A-Za-z]+)?$")
        .expect("time regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

fn invalid(input: &str, field: TimeField) -> AppError {
    AppError::InvalidTimeFormat {
        input: input.trim().to_string(),
        field,
    }
}

/// Parse `text` into a canonical time, or report which field is wrong.
pub fn parse_time(text: &str) -> AppResult<CanonicalTime> {
    let trimmed = text.trim();

    let Some(caps) = TIME_RE.captures(trimmed) else {
        // blame the hour unless it parsed and something after it did not
        let field = if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
            TimeField::Minute
        } else {
            TimeField::Hour
        };
        return Err(invalid(text, field));
    };

    let hour_digits = &caps["hour"];
    if hour_digits.len() > 2 {
        return Err(invalid(text, TimeField::Hour));
    }
    let hour: u16 = hour_digits
        .parse()
        .map_err(|_| invalid(text, TimeField::Hour))?;

    let minute: u16 = match caps.name("minute") {
        Some(m) if m.as_str().len() == 2 => m
            .as_str()
            .parse()
            .map_err(|_| invalid(text, TimeField::Minute))?,
        Some(_) => return Err(invalid(text, TimeField::Minute)),
        None => 0,
    };
    if minute > 59 {
        return Err(invalid(text, TimeField::Minute));
    }

    let meridiem = match caps.name("meridiem").map(|m| m.as_str().to_ascii_uppercase()) {
        Some(m) if m == "AM" => Some(Meridiem::Am),
        Some(m) if m == "PM" => Some(Meridiem::Pm),
        Some(_) => return Err(invalid(text, TimeField::Meridiem)),
        None => None,
    };

    let hour24 = match meridiem {
        Some(m) => {
            if !(1..=12).contains(&hour) {
                return Err(invalid(text, TimeField::Hour));
            }
            hour % 12 + if m == Meridiem::Pm { 12 } else { 0 }
        }
        None => {
            if hour > 23 {
                return Err(invalid(text, TimeField::Hour));
            }
            hour
        }
    };

    CanonicalTime::from_hm(hour24, minute).ok_or_else(|| invalid(text, TimeField::Hour))
}

/// `"HH:MM"` formatting of a minute count, e.g. for durations.
pub fn format_minutes(mins: u16) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
