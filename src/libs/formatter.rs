//! Persisted duration-field text format.
//!
//! The duration field is stored by the admin backend as text in one of two
//! shapes, and its parser accepts nothing else:
//!
//! - `HH:MM:SS` when less than a day elapsed
//! - `D HH:MM:SS` otherwise, where `D` is an unpadded day count
//!
//! Hours and minutes are zero-padded to two digits and the seconds are
//! always written as `00`. Reading is more lenient: the backend may also
//! render multi-day values as `D day, HH:MM:SS` or `D days, HH:MM:SS`, and
//! hours above 23 are folded into days.
//!
//! ## Examples
//!
//! ```rust
//! use duree::libs::duration::Duration;
//! use duree::libs::formatter::{format_duration, parse_persisted};
//!
//! assert_eq!(format_duration(&Duration::new(0, 2, 30)), "02:30:00");
//! assert_eq!(format_duration(&Duration::new(1, 1, 0)), "1 01:00:00");
//! assert_eq!(parse_persisted("1 01:00:00").unwrap(), Duration::new(1, 1, 0));
//! ```

use super::duration::{Duration, DurationError};

/// Formats a duration in the persisted-field convention.
pub fn format_duration(duration: &Duration) -> String {
    if duration.days > 0 {
        format!("{} {:02}:{:02}:00", duration.days, duration.hours, duration.minutes)
    } else {
        format!("{:02}:{:02}:00", duration.hours, duration.minutes)
    }
}

/// Reads a persisted duration back into a normalized [`Duration`].
///
/// Seconds are accepted and truncated.
pub fn parse_persisted(input: &str) -> Result<Duration, DurationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(DurationError::Empty);
    }

    let (days, clock) = match input.rsplit_once(' ') {
        Some((days, clock)) => {
            let days = days.trim().trim_end_matches(',').trim_end();
            let days = days.strip_suffix("days").or_else(|| days.strip_suffix("day")).unwrap_or(days).trim_end();
            (parse_component(days, "days", input)?, clock)
        }
        None => (0, input),
    };

    let parts: Vec<&str> = clock.split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return Err(DurationError::Malformed(input.to_string()));
    }

    let hours = parse_component(parts[0], "hours", input)?;
    let minutes = parse_component(parts[1], "minutes", input)?;
    if minutes >= 60 {
        return Err(DurationError::InvalidComponent {
            component: "minutes",
            input: input.to_string(),
        });
    }
    if let Some(seconds) = parts.get(2) {
        // Fractional seconds ("00:00:30.5") are tolerated.
        let whole = seconds.split('.').next().unwrap_or_default();
        if parse_component(whole, "seconds", input)? >= 60 {
            return Err(DurationError::InvalidComponent {
                component: "seconds",
                input: input.to_string(),
            });
        }
    }

    let total = days
        .checked_mul(24 * 60)
        .and_then(|m| hours.checked_mul(60).and_then(|h| m.checked_add(h)))
        .and_then(|m| m.checked_add(minutes))
        .filter(|m| m / (24 * 60) <= u64::from(u32::MAX))
        .ok_or_else(|| DurationError::Malformed(input.to_string()))?;

    Ok(Duration::from_minutes(total))
}

fn parse_component(text: &str, component: &'static str, input: &str) -> Result<u64, DurationError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DurationError::InvalidComponent {
            component,
            input: input.to_string(),
        });
    }
    text.parse().map_err(|_| DurationError::InvalidComponent {
        component,
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_under_a_day() {
        assert_eq!(format_duration(&Duration::default()), "00:00:00");
        assert_eq!(format_duration(&Duration::new(0, 2, 30)), "02:30:00");
        assert_eq!(format_duration(&Duration::new(0, 22, 0)), "22:00:00");
    }

    #[test]
    fn formats_with_day_prefix() {
        assert_eq!(format_duration(&Duration::new(1, 1, 0)), "1 01:00:00");
        assert_eq!(format_duration(&Duration::new(12, 0, 5)), "12 00:05:00");
    }

    #[test]
    fn parses_both_shapes() {
        assert_eq!(parse_persisted("02:15:00"), Ok(Duration::new(0, 2, 15)));
        assert_eq!(parse_persisted("3 04:05:00"), Ok(Duration::new(3, 4, 5)));
    }

    #[test]
    fn parses_backend_day_rendering() {
        assert_eq!(parse_persisted("1 day, 02:00:00"), Ok(Duration::new(1, 2, 0)));
        assert_eq!(parse_persisted("2 days, 00:30:00"), Ok(Duration::new(2, 0, 30)));
    }

    #[test]
    fn accepts_hh_mm_and_truncates_seconds() {
        assert_eq!(parse_persisted("0:50"), Ok(Duration::new(0, 0, 50)));
        assert_eq!(parse_persisted("07:15:59"), Ok(Duration::new(0, 7, 15)));
        assert_eq!(parse_persisted("07:15:30.250000"), Ok(Duration::new(0, 7, 15)));
    }

    #[test]
    fn folds_large_hours_into_days() {
        assert_eq!(parse_persisted("25:00:00"), Ok(Duration::new(1, 1, 0)));
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_persisted(""), Err(DurationError::Empty));
        assert_eq!(parse_persisted("   "), Err(DurationError::Empty));
        assert!(matches!(parse_persisted("0215"), Err(DurationError::Malformed(_))));
        assert!(matches!(parse_persisted("1:2:3:4"), Err(DurationError::Malformed(_))));
        assert!(matches!(
            parse_persisted("ab:00:00"),
            Err(DurationError::InvalidComponent { component: "hours", .. })
        ));
        assert!(matches!(
            parse_persisted("x 01:00:00"),
            Err(DurationError::InvalidComponent { component: "days", .. })
        ));
        assert!(matches!(
            parse_persisted("01:75:00"),
            Err(DurationError::InvalidComponent { component: "minutes", .. })
        ));
    }

    #[test]
    fn error_display() {
        assert_eq!(DurationError::Empty.to_string(), "empty duration");
        assert_eq!(
            DurationError::Malformed("0215".into()).to_string(),
            "malformed duration '0215', expected HH:MM:SS or D HH:MM:SS"
        );
    }
}
