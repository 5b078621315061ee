use chrono::{DateTime, Utc};

use crate::models::donation::Urgency;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const HIGH_URGENCY_HOURS: f64 = 2.0;
const MEDIUM_URGENCY_HOURS: f64 = 6.0;
const EXPIRING_SOON_HOURS: f64 = 2.0;

pub fn hours_until(expiry: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (expiry - now).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Urgency for a donation submitted at `now`. Already-expired food counts
/// as high urgency.
pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Urgency {
    let hours = hours_until(expiry, now);
    if hours <= HIGH_URGENCY_HOURS {
        Urgency::High
    } else if hours <= MEDIUM_URGENCY_HOURS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Human label for the remaining shelf life: "Expired", "<n>m left" under an
/// hour, otherwise "<n>h left" rounded to the nearest hour.
pub fn time_until_expiry(expiry: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = hours_until(expiry, now);
    if hours < 0.0 {
        "Expired".to_string()
    } else if hours < 1.0 {
        format!("{}m left", (hours * 60.0).round() as i64)
    } else {
        format!("{}h left", hours.round() as i64)
    }
}

pub fn is_expiring_soon(expiry: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let hours = hours_until(expiry, now);
    hours > 0.0 && hours <= EXPIRING_SOON_HOURS
}
