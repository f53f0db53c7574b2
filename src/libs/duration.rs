//! Elapsed-time value derived from a departure and an arrival time.
//!
//! A [`Duration`] is always normalized: `hours` stays in `0..24`, `minutes`
//! in `0..60`, and `days` is only non-zero once 24 or more hours elapsed.
//! The derivation rule is a single modular step: the arrival is assumed to
//! happen at most one calendar day after the departure, so a negative
//! difference is wrapped once by adding a full day.
//!
//! ## Examples
//!
//! ```rust
//! use duree::libs::duration::{compute_duration, Duration};
//!
//! assert_eq!(compute_duration("08:00", "10:30"), Some(Duration::new(0, 2, 30)));
//! assert_eq!(compute_duration("23:00", "01:00"), Some(Duration::new(0, 2, 0)));
//! assert_eq!(compute_duration("", "10:00"), None);
//! ```

use super::time_of_day::{TimeOfDay, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when reading a stored duration back.
///
/// Deriving a duration never fails; incomplete input is simply `None`.
/// These errors only concern text that claims to be a persisted duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("malformed duration '{0}', expected HH:MM:SS or D HH:MM:SS")]
    Malformed(String),

    #[error("invalid {component} in duration '{input}'")]
    InvalidComponent { component: &'static str, input: String },
}

/// A normalized days/hours/minutes elapsed-time value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Duration {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
}

impl Duration {
    /// Builds a duration from already-normalized parts.
    pub fn new(days: u32, hours: u32, minutes: u32) -> Self {
        debug_assert!(hours < 24 && minutes < 60);
        Self { days, hours, minutes }
    }

    /// Splits a non-negative minute count into days, hours and minutes.
    pub fn from_minutes(total: u64) -> Self {
        let total_hours = total / 60;
        let minutes = (total % 60) as u32;

        if total_hours >= 24 {
            Self {
                days: (total_hours / 24) as u32,
                hours: (total_hours % 24) as u32,
                minutes,
            }
        } else {
            Self {
                days: 0,
                hours: total_hours as u32,
                minutes,
            }
        }
    }

    pub fn total_minutes(&self) -> u64 {
        u64::from(self.days) * MINUTES_PER_DAY as u64 + u64::from(self.hours) * 60 + u64::from(self.minutes)
    }

    /// Hours elapsed with the days folded in.
    pub fn total_hours(&self) -> u64 {
        u64::from(self.days) * 24 + u64::from(self.hours)
    }

    pub fn to_chrono(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.total_minutes() as i64)
    }

    /// Short display form, e.g. `2h30`, as shown in timetable listings.
    pub fn humanize(&self) -> String {
        format!("{}h{:02}", self.total_hours(), self.minutes)
    }
}

/// Derives the elapsed time between two time-of-day values.
///
/// Returns `None` when the difference cannot be represented, which only
/// happens with out-of-range hours that still leave the arrival before the
/// departure after the one-day wrap.
pub fn between(depart: &TimeOfDay, arrivee: &TimeOfDay) -> Option<Duration> {
    let mut delta = arrivee.minutes_since_midnight() - depart.minutes_since_midnight();
    if delta < 0 {
        delta += MINUTES_PER_DAY;
    }

    u64::try_from(delta).ok().map(Duration::from_minutes)
}

/// Derives a duration from raw departure and arrival field text.
///
/// `None` means "not enough input yet": either side is empty or has fewer
/// than two colon-separated components.
pub fn compute_duration(depart: &str, arrivee: &str) -> Option<Duration> {
    let depart = TimeOfDay::parse(depart)?;
    let arrivee = TimeOfDay::parse(arrivee)?;
    between(&depart, &arrivee)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_difference() {
        assert_eq!(compute_duration("08:00", "10:30"), Some(Duration::new(0, 2, 30)));
        assert_eq!(compute_duration("01:00", "23:00"), Some(Duration::new(0, 22, 0)));
    }

    #[test]
    fn wraps_past_midnight() {
        assert_eq!(compute_duration("23:00", "01:00"), Some(Duration::new(0, 2, 0)));
        assert_eq!(compute_duration("22:45", "00:10"), Some(Duration::new(0, 1, 25)));
    }

    #[test]
    fn identical_times_are_zero() {
        assert_eq!(compute_duration("00:00", "00:00"), Some(Duration::default()));
        assert_eq!(compute_duration("12:34", "12:34:59"), Some(Duration::default()));
    }

    #[test]
    fn seconds_do_not_count() {
        assert_eq!(compute_duration("08:00:59", "08:01:00"), Some(Duration::new(0, 0, 1)));
    }

    #[test]
    fn pending_when_either_side_unparseable() {
        assert_eq!(compute_duration("", "10:00"), None);
        assert_eq!(compute_duration("10:00", ""), None);
        assert_eq!(compute_duration("10", "11:00"), None);
    }

    #[test]
    fn out_of_range_hours_roll_into_days() {
        assert_eq!(compute_duration("00:00", "25:00"), Some(Duration::new(1, 1, 0)));
    }

    #[test]
    fn unrepresentable_after_single_wrap() {
        assert_eq!(compute_duration("99:00", "00:00"), None);
    }

    #[test]
    fn from_minutes_normalizes() {
        assert_eq!(Duration::from_minutes(0), Duration::default());
        assert_eq!(Duration::from_minutes(59), Duration::new(0, 0, 59));
        assert_eq!(Duration::from_minutes(1439), Duration::new(0, 23, 59));
        assert_eq!(Duration::from_minutes(1440), Duration::new(1, 0, 0));
        assert_eq!(Duration::from_minutes(25 * 60), Duration::new(1, 1, 0));
    }

    #[test]
    fn total_minutes_round_trip() {
        let d = Duration::new(2, 3, 4);
        assert_eq!(d.total_minutes(), 2 * 1440 + 3 * 60 + 4);
        assert_eq!(Duration::from_minutes(d.total_minutes()), d);
    }

    #[test]
    fn humanize_folds_days_into_hours() {
        assert_eq!(Duration::new(0, 2, 5).humanize(), "2h05");
        assert_eq!(Duration::new(1, 1, 0).humanize(), "25h00");
        assert_eq!(Duration::default().humanize(), "0h00");
    }

    #[test]
    fn to_chrono_matches_minutes() {
        assert_eq!(Duration::new(0, 2, 15).to_chrono(), chrono::Duration::minutes(135));
    }

    #[test]
    fn components_always_in_range() {
        for dh in 0..24u32 {
            for dm in (0..60u32).step_by(7) {
                for ah in 0..24u32 {
                    for am in (0..60u32).step_by(11) {
                        let depart = format!("{:02}:{:02}", dh, dm);
                        let arrivee = format!("{:02}:{:02}", ah, am);
                        let d = compute_duration(&depart, &arrivee).unwrap();
                        assert!(d.hours < 24, "{depart} -> {arrivee}: {d:?}");
                        assert!(d.minutes < 60, "{depart} -> {arrivee}: {d:?}");
                        assert_eq!(d.days, 0);
                    }
                }
            }
        }
    }
}
