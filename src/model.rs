// Core structs: Zone, PricePoint, PriceSeries and the error types
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Display unit: öre per kWh.
pub const CONVERT_TO_ORE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    SE1,
    SE2,
    SE3,
    SE4,
}

impl Zone {
    pub fn code(&self) -> &'static str {
        match self {
            Zone::SE1 => "SE1",
            Zone::SE2 => "SE2",
            Zone::SE3 => "SE3",
            Zone::SE4 => "SE4",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Zone {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SE1" => Ok(Zone::SE1),
            "SE2" => Ok(Zone::SE2),
            "SE3" => Ok(Zone::SE3),
            "SE4" => Ok(Zone::SE4),
            _ => Err(ArgError::InvalidZone(s.to_string())),
        }
    }
}

/// Length of a charging window, counted in series entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargingDuration {
    TwoHours,
    FourHours,
    EightHours,
}

impl ChargingDuration {
    pub fn entries(&self) -> usize {
        match self {
            ChargingDuration::TwoHours => 2,
            ChargingDuration::FourHours => 4,
            ChargingDuration::EightHours => 8,
        }
    }
}

impl FromStr for ChargingDuration {
    type Err = ArgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('h').unwrap_or(trimmed);
        match digits.parse::<u8>() {
            Ok(2) => Ok(ChargingDuration::TwoHours),
            Ok(4) => Ok(ChargingDuration::FourHours),
            Ok(8) => Ok(ChargingDuration::EightHours),
            _ => Err(ArgError::InvalidChargingDuration(s.to_string())),
        }
    }
}

/// One priced interval `[start, end)` as published by the feed.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub sek_per_kwh: f64,
    pub eur_per_kwh: Option<f64>,
    pub exchange_rate: Option<f64>,
}

impl PricePoint {
    pub fn new(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>, sek_per_kwh: f64) -> Self {
        Self {
            start,
            end,
            sek_per_kwh,
            eur_per_kwh: None,
            exchange_rate: None,
        }
    }

    pub fn display_price(&self) -> f64 {
        self.sek_per_kwh * CONVERT_TO_ORE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Hourly,
    QuarterHour,
}

impl Resolution {
    pub const QUARTERS_PER_DAY: usize = 96;

    pub fn detect(len: usize) -> Self {
        if len == Self::QUARTERS_PER_DAY {
            Resolution::QuarterHour
        } else {
            Resolution::Hourly
        }
    }
}

/// Chronologically ordered, read-only sequence of price points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn prices(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.sek_per_kwh).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::detect(self.points.len())
    }

    /// Appends `other` after `self`; both must already be in order.
    pub fn concat(mut self, other: PriceSeries) -> Self {
        self.points.extend(other.points);
        self
    }
}

/// Result of a min/max scan: a single entry or an aggregated hourly bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSpan {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub price: f64,
}

impl PriceSpan {
    pub fn display_price(&self) -> f64 {
        self.price * CONVERT_TO_ORE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChargingWindow {
    pub start_index: usize,
    pub length: usize,
    pub start: DateTime<FixedOffset>,
    pub average_price: f64,
}

impl ChargingWindow {
    pub fn display_price(&self) -> f64 {
        self.average_price * CONVERT_TO_ORE
    }
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status {0}")]
    InvalidResponse(u16),
    #[error("no prices published")]
    NotFound,
}

impl From<reqwest::Error> for FeedError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FeedError::Timeout
        } else {
            FeedError::HttpError(e.to_string())
        }
    }
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("malformed price payload: {0}")]
    JsonParseError(#[from] serde_json::Error),
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
    #[error("interval does not end after it starts: {0}")]
    EmptyInterval(String),
}

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("no price data available for {zone} on {date}")]
    DataUnavailable { zone: Zone, date: NaiveDate },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no prices in series")]
    NoData,
    #[error("window of {needed} entries exceeds series of {available}")]
    InsufficientData { needed: usize, available: usize },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("invalid zone")]
    InvalidZone(String),
    #[error("invalid date")]
    InvalidDate(String),
    #[error("Not a valid charging time")]
    InvalidChargingDuration(String),
    #[error("unknown input")]
    UnknownArgument(String),
    #[error("missing value for {0}")]
    MissingValue(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown time zone: {0}")]
    TimeZone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_parses_case_insensitively() {
        assert_eq!("se3".parse::<Zone>(), Ok(Zone::SE3));
        assert_eq!(" SE4 ".parse::<Zone>(), Ok(Zone::SE4));
        assert_eq!(
            "XX".parse::<Zone>(),
            Err(ArgError::InvalidZone("XX".to_string()))
        );
        assert_eq!(Zone::default(), Zone::SE1);
    }

    #[test]
    fn charging_duration_accepts_listed_values_only() {
        assert_eq!("2h".parse::<ChargingDuration>(), Ok(ChargingDuration::TwoHours));
        assert_eq!("4h".parse::<ChargingDuration>(), Ok(ChargingDuration::FourHours));
        assert_eq!("8".parse::<ChargingDuration>(), Ok(ChargingDuration::EightHours));
        assert!("3h".parse::<ChargingDuration>().is_err());
        assert!("h".parse::<ChargingDuration>().is_err());
        assert!("two".parse::<ChargingDuration>().is_err());
    }

    #[test]
    fn resolution_is_quarter_hour_only_for_96_entries() {
        assert_eq!(Resolution::detect(96), Resolution::QuarterHour);
        assert_eq!(Resolution::detect(24), Resolution::Hourly);
        assert_eq!(Resolution::detect(192), Resolution::Hourly);
        assert_eq!(Resolution::detect(0), Resolution::Hourly);
    }
}
