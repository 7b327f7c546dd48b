use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Working days a schedule can show.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(try_from = "String", into = "String")]
pub enum Weekday {
    #[value(alias = "monday")]
    Mon,
    #[value(alias = "tuesday")]
    Tue,
    #[value(alias = "wednesday")]
    Wed,
    #[value(alias = "thursday")]
    Thu,
    #[value(alias = "friday")]
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
        }
    }

    /// Accepts `mon`, `Monday`, `MON`, ...
    pub fn from_code(code: &str) -> Option<Self> {
        let lower = code.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| lower == d.code() || lower == d.full_name().to_lowercase())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl TryFrom<String> for Weekday {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Weekday::from_code(&value).ok_or_else(|| format!("invalid day '{value}'"))
    }
}

impl From<Weekday> for String {
    fn from(day: Weekday) -> Self {
        day.code().to_string()
    }
}
