// Utility functions
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// Parses an RFC 3339 timestamp, keeping the publisher's UTC offset.
pub fn parse_datetime(date_str: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(date_str.trim()).ok()
}

/// `HH` in the timestamp's own offset.
pub fn format_hour(time: &DateTime<FixedOffset>) -> String {
    time.format("%H").to_string()
}

/// `HH:MM` in the timestamp's own offset.
pub fn format_hour_minute(time: &DateTime<FixedOffset>) -> String {
    time.format("%H:%M").to_string()
}

/// Locale rules for rendering prices.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
    pub fraction_digits: usize,
}

impl NumberFormat {
    pub fn swedish() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: Some('\u{a0}'),
            fraction_digits: 2,
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::swedish()
    }
}

/// Renders `value` with a fixed number of fraction digits and the given separators.
pub fn format_number(value: f64, format: &NumberFormat) -> String {
    let raw = format!("{:.*}", format.fraction_digits, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + 4);
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if let Some(sep) = format.grouping_separator {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push(sep);
            }
        }
        out.push(c);
    }

    if let Some(frac_part) = frac_part {
        out.push(format.decimal_separator);
        out.push_str(frac_part);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swedish_format_uses_comma_and_two_digits() {
        let sv = NumberFormat::swedish();
        assert_eq!(format_number(12.5, &sv), "12,50");
        assert_eq!(format_number(0.0, &sv), "0,00");
        assert_eq!(format_number(200.0, &sv), "200,00");
        assert_eq!(format_number(-3.456, &sv), "-3,46");
        assert_eq!(format_number(-0.001, &sv), "0,00");
    }

    #[test]
    fn large_values_are_grouped() {
        let sv = NumberFormat::swedish();
        assert_eq!(format_number(1234.5, &sv), "1\u{a0}234,50");
        assert_eq!(format_number(1234567.0, &sv), "1\u{a0}234\u{a0}567,00");
    }

    #[test]
    fn custom_format_is_honoured() {
        let fmt = NumberFormat {
            decimal_separator: '.',
            grouping_separator: None,
            fraction_digits: 0,
        };
        assert_eq!(format_number(1234.4, &fmt), "1234");
    }

    #[test]
    fn timestamps_keep_their_offset() {
        let t = parse_datetime("2025-10-01T13:15:00+02:00").unwrap();
        assert_eq!(format_hour(&t), "13");
        assert_eq!(format_hour_minute(&t), "13:15");
        assert!(parse_datetime("13:15").is_none());
    }
}
