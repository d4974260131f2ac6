use chrono::{DateTime, Utc};

/// Wording used when rendering how long ago something happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStyle {
    /// "5 minutes ago", used on cards.
    Long,
    /// "5m ago", used in chat bubbles and notifications.
    Short,
}

/// Renders `timestamp` relative to `now`. Anything a week or older, and
/// anything in the future by more than a minute, falls back to the date.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>, style: AgeStyle) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 0 && elapsed.num_seconds() < -60 {
        return timestamp.format("%Y-%m-%d").to_string();
    }
    if minutes < 1 {
        return "Just now".to_string();
    }

    match style {
        AgeStyle::Long if minutes < 60 => plural(minutes, "minute"),
        AgeStyle::Long if hours < 24 => plural(hours, "hour"),
        AgeStyle::Long if days < 7 => plural(days, "day"),
        AgeStyle::Short if minutes < 60 => format!("{minutes}m ago"),
        AgeStyle::Short if hours < 24 => format!("{hours}h ago"),
        AgeStyle::Short if days < 7 => format!("{days}d ago"),
        _ => timestamp.format("%Y-%m-%d").to_string(),
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
