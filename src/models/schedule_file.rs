//! On-disk schedule description (YAML, or JSON for `.json` files).
//! Entries keep the user's original text; validation happens when they are
//! fed through the schedule model.

use super::day::Weekday;
use super::event::NewEvent;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Weekday>>,
    #[serde(default)]
    pub events: Vec<EventEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    pub title: String,
    pub day: String,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&EventEntry> for NewEvent {
    fn from(e: &EventEntry) -> Self {
        NewEvent {
            title: e.title.clone(),
            day: e.day.clone(),
            start: e.start.clone(),
            end: e.end.clone(),
            location: e.location.clone(),
            color: e.color.clone(),
        }
    }
}

impl From<&NewEvent> for EventEntry {
    fn from(e: &NewEvent) -> Self {
        EventEntry {
            title: e.title.trim().to_string(),
            day: e.day.trim().to_string(),
            start: e.start.trim().to_string(),
            end: e.end.trim().to_string(),
            location: e.location.clone().filter(|l| !l.trim().is_empty()),
            color: e.color.clone().filter(|c| !c.trim().is_empty()),
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

impl ScheduleFile {
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ScheduleFile(e.to_string()))
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        serde_json::from_str(content).map_err(|e| AppError::ScheduleFile(e.to_string()))
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::ScheduleFile(format!("cannot read '{}': {e}", path.display()))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        if is_json(path) {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
    }

    /// Like `load`, but a missing file is an empty schedule.
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)
                .map_err(|e| AppError::ScheduleFile(e.to_string()))?
        } else {
            serde_yaml::to_string(self).map_err(|e| AppError::ScheduleFile(e.to_string()))?
        };
        fs::write(path, content)?;
        Ok(())
    }
}
