//! Lenient time-of-day parsing for form input.
//!
//! Time fields arrive as raw text straight from the form layer, usually
//! `HH:MM` or `HH:MM:SS`, but also half-typed values while the user is still
//! editing. Parsing is deliberately forgiving:
//!
//! - Empty text, or text with fewer than two colon-separated components, is
//!   *unparseable* and yields `None`.
//! - Each component is read as a leading integer (`"08h"` → 8). Anything
//!   non-numeric, including a negative value, becomes 0.
//! - A third component is read as seconds; further components are ignored.
//!
//! Out-of-range values such as `"25:00"` are kept as typed. The duration
//! arithmetic downstream is responsible for normalizing its own output.
//!
//! ## Examples
//!
//! ```rust
//! use duree::libs::time_of_day::TimeOfDay;
//!
//! let t = TimeOfDay::parse("08:30").unwrap();
//! assert_eq!((t.hours, t.minutes, t.seconds), (8, 30, 0));
//!
//! assert!(TimeOfDay::parse("").is_none());
//! assert!(TimeOfDay::parse("0830").is_none());
//! ```

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A parsed hours/minutes/seconds value extracted from a colon-delimited string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hours: u32,
    pub minutes: u32,
    /// Carried for completeness; never contributes to a derived duration.
    pub seconds: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self { hours, minutes, seconds }
    }

    /// Parses raw field text. Returns `None` when the text is not yet a time.
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }

        let parts: Vec<&str> = input.split(':').collect();
        if parts.len() < 2 {
            return None;
        }

        Some(Self {
            hours: leading_int(parts[0]),
            minutes: leading_int(parts[1]),
            seconds: parts.get(2).map(|s| leading_int(s)).unwrap_or(0),
        })
    }

    /// Minutes elapsed since midnight, seconds discarded.
    pub fn minutes_since_midnight(&self) -> i64 {
        i64::from(self.hours) * 60 + i64::from(self.minutes)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(time.hour(), time.minute(), time.second())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Reads the leading unsigned integer of a component, or 0 if there is none.
///
/// Leading whitespace and a single `+` are skipped. Overflow saturates.
/// A `-` sign yields 0 rather than a negative value, so minutes since
/// midnight never go below zero.
fn leading_int(component: &str) -> u32 {
    let trimmed = component.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |acc, d| acc.saturating_mul(10).saturating_add(d))
}
