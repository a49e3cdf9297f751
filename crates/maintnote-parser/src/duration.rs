use once_cell::sync::Lazy;
use regex::Regex;

use crate::extractors::compile;
use crate::window::MaintenanceWindow;

static UP_TO_HOURS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)up to\s+(\d+(?:\.\d+)?)\s*hours?"));
static MINUTES: Lazy<Regex> = Lazy::new(|| compile(r"(?i)(\d{1,3})\s*minutes?"));
static ANY_HOURS: Lazy<Regex> = Lazy::new(|| compile(r"(?i)hours?"));

/// Human-readable outage length, preferring what the carrier states over what
/// the window implies. `None` when neither is available.
pub fn describe_duration(text: &str, window: Option<&MaintenanceWindow>) -> Option<String> {
    if let Some(hours) = UP_TO_HOURS
        .captures(text)
        .and_then(|caps| caps[1].parse::<f64>().ok())
    {
        return Some(if hours == 1.0 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        });
    }

    if !ANY_HOURS.is_match(text) {
        if let Some(minutes) = MINUTES
            .captures(text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        {
            return Some(format!("{minutes} minutes"));
        }
    }

    window.map(|window| format_minutes(window.duration_minutes()))
}

fn format_minutes(total: i64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    let hour_unit = if hours == 1 { "Hour" } else { "Hours" };

    if minutes == 0 {
        format!("{hours} {hour_unit}")
    } else if hours == 0 {
        format!("{minutes} Minutes")
    } else {
        format!("{hours} {hour_unit} {minutes} Minutes")
    }
}
