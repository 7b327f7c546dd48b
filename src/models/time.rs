use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minutes since midnight, always in `0..=1439`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalTime(pub(crate) u16);

impl CanonicalTime {
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour * 60 + minute))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    pub fn is_whole_hour(self) -> bool {
        self.minute() == 0
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // always valid: hour <= 23, minute <= 59
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    /// 12-hour label used on the page, e.g. `9:30 AM`.
    pub fn to_12h(self) -> String {
        self.to_naive_time().format("%-I:%M %p").to_string()
    }
}

impl fmt::Display for CanonicalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for CanonicalTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
