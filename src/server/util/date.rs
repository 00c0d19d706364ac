use chrono::NaiveDate;

/// Turns `YYYY.MM.DD` into `DD.MM.YYYY`; values with fewer than three parts are returned as-is.
pub fn reverse_dotted_date(date: &str) -> String {
    let parts: Vec<&str> = date.split('.').collect();

    if parts.len() >= 3 {
        format!("{}.{}.{}", parts[2], parts[1], parts[0])
    } else {
        date.to_string()
    }
}

/// Date part of a career event timestamp such as `1942.11.19 06:30:00`.
///
/// # Returns
/// `(display, sortable)` where `display` is `DD.MM.YYYY` and `sortable` keeps the game's
/// `YYYY.MM.DD` order. Both are empty when the event has no date.
pub fn event_date(raw: Option<&str>) -> (String, String) {
    let day = raw
        .and_then(|raw| raw.split_whitespace().next())
        .unwrap_or_default();

    if day.split('.').count() == 3 {
        (reverse_dotted_date(day), day.to_string())
    } else {
        (day.to_string(), day.to_string())
    }
}

/// Parses a `YYYY.MM.DD` date
pub fn parse_game_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y.%m.%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_event_timestamp() {
        assert_eq!(
            event_date(Some("1942.11.19 06:30:00")),
            ("19.11.1942".to_string(), "1942.11.19".to_string())
        );
    }

    #[test]
    fn keeps_unexpected_event_dates() {
        assert_eq!(
            event_date(Some("1942-11-19")),
            ("1942-11-19".to_string(), "1942-11-19".to_string())
        );
        assert_eq!(event_date(None), (String::new(), String::new()));
    }

    #[test]
    fn parses_game_dates() {
        assert_eq!(
            parse_game_date("1943.01.01"),
            NaiveDate::from_ymd_opt(1943, 1, 1)
        );
        assert!(parse_game_date("01.01.1943").is_none());
    }
}
