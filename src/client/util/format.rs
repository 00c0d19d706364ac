//! Display formatting for passport values.

use serde_json::Value;

/// Renders a stat value; labels containing "flight time" carry seconds and read as hours and
/// minutes.
pub fn format_stat_value(label: &str, value: &Value) -> String {
    if label.to_lowercase().contains("flight time") {
        if let Some(seconds) = value.as_f64() {
            let seconds = seconds.max(0.0) as u64;
            let hours = seconds / 3600;
            let minutes = (seconds % 3600) / 60;

            return format!("{} h {} min", hours, minutes);
        }
    }

    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Number(number) => match number.as_f64() {
            Some(float) if number.is_f64() && float.fract() == 0.0 => format!("{}", float as i64),
            _ => number.to_string(),
        },
        other => other.to_string(),
    }
}

/// Appends a cache-busting timestamp so a replaced photo is not served from cache
pub fn cache_busted(url: &str) -> String {
    with_cache_key(url, chrono::Utc::now().timestamp_millis())
}

pub fn with_cache_key(url: &str, millis: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", url, separator, millis)
}

/// Logbook kill cell; zero renders blank
pub fn kill_cell(count: u32) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}
