//! # Display-level formatting helpers
//!
//! The backend emits zone-less ISO-8601 timestamps (`2024-03-01T10:00:00`);
//! occasionally a full RFC 3339 value. Parsing here is lenient and every
//! formatter falls back to the raw string rather than failing — a date we
//! cannot parse is still better shown than hidden.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

fn parse(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Short date for card bylines: "Mar 1, 2024".
pub fn short_date(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Long date for profile pages: "March 1, 2024".
pub fn long_date(raw: &str) -> String {
    match parse(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Relative age for the activity timeline: "just now", "3 hours ago",
/// "yesterday", "2 weeks ago", falling back to [`short_date`] past a
/// month.
pub fn relative_date(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse(raw) else {
        return raw.to_string();
    };
    let delta = now.naive_utc() - then;
    let minutes = delta.num_minutes();
    let hours = delta.num_hours();
    let days = delta.num_days();

    if days <= 0 && hours <= 0 {
        if minutes <= 0 {
            "just now".to_string()
        } else {
            format!("{minutes} minutes ago")
        }
    } else if days <= 0 {
        format!("{hours} hours ago")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{days} days ago")
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else {
        short_date(raw)
    }
}

/// How long an account has existed: "12 days", "3 months", "2 years".
pub fn member_duration(raw: &str, now: DateTime<Utc>) -> String {
    let Some(then) = parse(raw) else {
        return "Unknown".to_string();
    };
    let days = (now.naive_utc() - then).num_days().max(0);
    if days < 30 {
        format!("{days} days")
    } else if days < 365 {
        format!("{} months", days / 30)
    } else {
        format!("{} years", days / 365)
    }
}

/// Clip preview text to `max` characters on a char boundary.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max).collect();
        format!("{clipped}...")
    }
}

/// First letter of a username, uppercased, for avatar placeholders.
pub fn initial(username: &str) -> String {
    username
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parses_backend_timestamp_shapes() {
        assert_eq!(short_date("2024-03-01T10:00:00"), "Mar 1, 2024");
        assert_eq!(short_date("2024-03-01T10:00:00.123"), "Mar 1, 2024");
        assert_eq!(short_date("2024-03-01T10:00:00Z"), "Mar 1, 2024");
        assert_eq!(short_date("2024-03-01"), "Mar 1, 2024");
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw() {
        assert_eq!(short_date("soon"), "soon");
        assert_eq!(long_date(""), "");
    }

    #[test]
    fn test_relative_date_buckets() {
        assert_eq!(relative_date("2024-03-15T11:59:30", now()), "just now");
        assert_eq!(relative_date("2024-03-15T11:10:00", now()), "50 minutes ago");
        assert_eq!(relative_date("2024-03-15T07:00:00", now()), "5 hours ago");
        assert_eq!(relative_date("2024-03-14T09:00:00", now()), "yesterday");
        assert_eq!(relative_date("2024-03-12T12:00:00", now()), "3 days ago");
        assert_eq!(relative_date("2024-03-01T12:00:00", now()), "2 weeks ago");
        assert_eq!(relative_date("2024-01-01T12:00:00", now()), "Jan 1, 2024");
    }

    #[test]
    fn test_member_duration_buckets() {
        assert_eq!(member_duration("2024-03-03T12:00:00", now()), "12 days");
        assert_eq!(member_duration("2023-11-15T12:00:00", now()), "4 months");
        assert_eq!(member_duration("2021-03-15T12:00:00", now()), "3 years");
        assert_eq!(member_duration("garbage", now()), "Unknown");
    }

    #[test]
    fn test_truncate_clips_on_char_boundary() {
        assert_eq!(truncate("short", 150), "short");
        let long = "x".repeat(200);
        let clipped = truncate(&long, 150);
        assert_eq!(clipped.len(), 153);
        assert!(clipped.ends_with("..."));
        // Multi-byte input must not panic.
        assert_eq!(truncate("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial(""), "U");
    }
}
