//! Parsing of the pilot `description` column.
//!
//! The game stores pilot identity as a query-string-like value, for example
//! `fullname=Ivan%20Petrov&birthCountryInfo=101&birthDate=1920.03.15`. The whole string doubles
//! as the pilot's identifier on the wire.

use std::sync::OnceLock;

use regex::Regex;

use crate::server::util::date::reverse_dotted_date;

/// Name used when the description carries no `fullname`.
pub static UNKNOWN: &str = "Unknown";

pub const SOVIET_UNION: i32 = 101;
pub const GREAT_BRITAIN: i32 = 102;
pub const UNITED_STATES: i32 = 103;
pub const GERMANY: i32 = 201;

/// Maps the game's country ID to a display name.
pub fn country_name(country_id: Option<i32>) -> &'static str {
    match country_id {
        Some(SOVIET_UNION) => "Soviet Union",
        Some(GREAT_BRITAIN) => "Great Britain",
        Some(UNITED_STATES) => "United States of America",
        Some(GERMANY) => "Germany",
        _ => UNKNOWN,
    }
}

/// Typed view over a pilot description string.
#[derive(Clone, Copy, Debug)]
pub struct PilotDescription<'a>(pub &'a str);

impl<'a> PilotDescription<'a> {
    /// Full name with `%20` decoded to spaces, or "Unknown"
    pub fn full_name(&self) -> String {
        static FULLNAME_RE: OnceLock<Regex> = OnceLock::new();
        let regex = FULLNAME_RE
            .get_or_init(|| Regex::new(r"fullname=([^&]+)").expect("valid fullname regex"));

        regex
            .captures(self.0)
            .map(|caps| caps[1].replace("%20", " "))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// First word of the full name and the remainder
    pub fn split_name(&self) -> (String, String) {
        let name = self.full_name();

        match name.split_once(' ') {
            Some((first, last)) => (first.to_string(), last.to_string()),
            None => (name, String::new()),
        }
    }

    pub fn country_id(&self) -> Option<i32> {
        static COUNTRY_RE: OnceLock<Regex> = OnceLock::new();
        let regex = COUNTRY_RE
            .get_or_init(|| Regex::new(r"birthCountryInfo=(\d+)").expect("valid country regex"));

        regex
            .captures(self.0)
            .and_then(|caps| caps[1].parse().ok())
    }

    pub fn country_name(&self) -> &'static str {
        country_name(self.country_id())
    }

    /// Birth date as `DD.MM.YYYY`, or empty when absent
    pub fn birth_date(&self) -> String {
        static BIRTHDATE_RE: OnceLock<Regex> = OnceLock::new();
        let regex = BIRTHDATE_RE
            .get_or_init(|| Regex::new(r"birthDate=([\d.]+)").expect("valid birth date regex"));

        regex
            .captures(self.0)
            .map(|caps| reverse_dotted_date(&caps[1]))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DESC: &str = "fullname=Ivan%20Ivanovich%20Petrov&birthCountryInfo=101&birthDate=1920.03.15&avatar=3";

    #[test]
    fn parses_all_fields() {
        let desc = PilotDescription(DESC);

        assert_eq!(desc.full_name(), "Ivan Ivanovich Petrov");
        assert_eq!(
            desc.split_name(),
            ("Ivan".to_string(), "Ivanovich Petrov".to_string())
        );
        assert_eq!(desc.country_id(), Some(101));
        assert_eq!(desc.country_name(), "Soviet Union");
        assert_eq!(desc.birth_date(), "15.03.1920");
    }

    #[test]
    fn missing_fields_fall_back() {
        let desc = PilotDescription("avatar=3");

        assert_eq!(desc.full_name(), "Unknown");
        assert_eq!(desc.split_name(), ("Unknown".to_string(), String::new()));
        assert_eq!(desc.country_name(), "Unknown");
        assert_eq!(desc.birth_date(), "");
    }

    #[test]
    fn unknown_country_id_has_no_name() {
        assert_eq!(PilotDescription("birthCountryInfo=999").country_name(), "Unknown");
    }
}
