//! Human-friendly relative time formatting.

use chrono::{DateTime, Utc};

/// Formats the difference between `then` and `now` as a coarse relative
/// string ("3 days ago", "in 2 hours", "just now").
///
/// Differences under a minute collapse to "just now"; each unit switches
/// over at its natural boundary (60 minutes, 24 hours, 30 days, 12 months).
pub fn humanize_date_difference(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(then);
    let in_future = delta.num_seconds() < 0;
    let seconds = delta.num_seconds().abs();

    let (amount, unit) = if seconds < 60 {
        return "just now".to_owned();
    } else if seconds < 60 * 60 {
        (seconds / 60, "minute")
    } else if seconds < 24 * 60 * 60 {
        (seconds / (60 * 60), "hour")
    } else if seconds < 30 * 24 * 60 * 60 {
        (seconds / (24 * 60 * 60), "day")
    } else if seconds < 365 * 24 * 60 * 60 {
        (seconds / (30 * 24 * 60 * 60), "month")
    } else {
        (seconds / (365 * 24 * 60 * 60), "year")
    };

    let plural = if amount == 1 { "" } else { "s" };
    if in_future {
        format!("in {amount} {unit}{plural}")
    } else {
        format!("{amount} {unit}{plural} ago")
    }
}
