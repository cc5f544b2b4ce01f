//! Clock times without a date.
//!
//! Timetables come in both 24-hour (`13:15`, `05:45:00`) and 12-hour
//! (`1:15 PM`, `5:45am`) notation, so parsing accepts either.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};

/// Accepted input layouts, tried in order.
const FORMATS: [&str; 6] = [
    "%H:%M",
    "%H:%M:%S",
    "%I:%M %p",
    "%I:%M%p",
    "%I:%M:%S %p",
    "%I:%M:%S%p",
];

/// Hour and minute of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidTime { hour, minute });
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Parse either notation, e.g. `"05:45"` or `"5:45 AM"`.
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim();
        for layout in FORMATS {
            if let Ok(t) = NaiveTime::parse_from_str(s, layout) {
                trace!(input, layout, "parsed time");
                return Ok(t.into());
            }
        }
        Err(Error::InvalidTimeFormat {
            input: input.to_string(),
        })
    }

    /// `HH:MM`
    pub fn to_24h(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// `h:MM AM`/`h:MM PM`
    pub fn to_12h(&self) -> String {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute, suffix)
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        // fields are range-checked on construction
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default()
    }

    /// This time on `date`.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.as_naive_time())
    }

    /// Round fractional hours to the nearest minute, wrapping into one day.
    ///
    /// Returns `None` for non-finite input (uncomputable astronomical times).
    pub fn from_hours(hours: f64) -> Option<Self> {
        if !hours.is_finite() {
            return None;
        }
        let total = (hours * 60.0).round() as i64;
        let total = total.rem_euclid(24 * 60) as u32;
        Some(Self {
            hour: total / 60,
            minute: total % 60,
        })
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_24h()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_24h())
    }
}
