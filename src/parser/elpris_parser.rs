// elprisetjustnu.se JSON parsing
use crate::model::{ParserError, PricePoint, PriceSeries};
use crate::utils::parse_datetime;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RawPrice {
    #[serde(rename = "SEK_per_kWh")]
    sek_per_kwh: f64,
    #[serde(rename = "EUR_per_kWh")]
    eur_per_kwh: Option<f64>,
    #[serde(rename = "EXR")]
    exchange_rate: Option<f64>,
    time_start: String,
    time_end: String,
}

pub trait Parser {
    fn parse(&self, body: &str) -> Result<PriceSeries, ParserError>;
}

pub struct ElprisParser;

impl ElprisParser {
    pub fn new() -> Self {
        Self
    }
}

impl Parser for ElprisParser {
    fn parse(&self, body: &str) -> Result<PriceSeries, ParserError> {
        let raw: Vec<RawPrice> = serde_json::from_str(body)?;

        let mut points = Vec::with_capacity(raw.len());
        for entry in raw {
            let start = parse_datetime(&entry.time_start)
                .ok_or_else(|| ParserError::InvalidTimestamp(entry.time_start.clone()))?;
            let end = parse_datetime(&entry.time_end)
                .ok_or_else(|| ParserError::InvalidTimestamp(entry.time_end.clone()))?;
            if start >= end {
                return Err(ParserError::EmptyInterval(entry.time_start));
            }

            points.push(PricePoint {
                eur_per_kwh: entry.eur_per_kwh,
                exchange_rate: entry.exchange_rate,
                ..PricePoint::new(start, end, entry.sek_per_kwh)
            });
        }

        points.sort_by_key(|p| p.start);
        Ok(PriceSeries::new(points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"SEK_per_kWh":0.5,"EUR_per_kWh":0.045,"EXR":11.1,"time_start":"2025-10-01T01:00:00+02:00","time_end":"2025-10-01T02:00:00+02:00"},
        {"SEK_per_kWh":0.25,"EUR_per_kWh":0.022,"EXR":11.1,"time_start":"2025-10-01T00:00:00+02:00","time_end":"2025-10-01T01:00:00+02:00"}
    ]"#;

    #[test]
    fn parses_and_orders_by_start() {
        let series = ElprisParser::new().parse(SAMPLE).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.prices(), vec![0.25, 0.5]);
        let first = &series.points()[0];
        assert_eq!(first.eur_per_kwh, Some(0.022));
        assert_eq!(first.exchange_rate, Some(11.1));
        assert_eq!(first.start.to_rfc3339(), "2025-10-01T00:00:00+02:00");
    }

    #[test]
    fn empty_array_is_an_empty_series() {
        let series = ElprisParser::new().parse("[]").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn optional_fields_may_be_missing() {
        let body = r#"[{"SEK_per_kWh":1.0,"time_start":"2025-10-01T00:00:00+02:00","time_end":"2025-10-01T00:15:00+02:00"}]"#;
        let series = ElprisParser::new().parse(body).unwrap();
        assert_eq!(series.points()[0].eur_per_kwh, None);
    }

    #[test]
    fn rejects_bad_timestamps_and_intervals() {
        let bad_time = r#"[{"SEK_per_kWh":1.0,"time_start":"yesterday","time_end":"2025-10-01T01:00:00+02:00"}]"#;
        assert!(matches!(
            ElprisParser::new().parse(bad_time),
            Err(ParserError::InvalidTimestamp(_))
        ));

        let backwards = r#"[{"SEK_per_kWh":1.0,"time_start":"2025-10-01T01:00:00+02:00","time_end":"2025-10-01T01:00:00+02:00"}]"#;
        assert!(matches!(
            ElprisParser::new().parse(backwards),
            Err(ParserError::EmptyInterval(_))
        ));

        assert!(matches!(
            ElprisParser::new().parse("<html>"),
            Err(ParserError::JsonParseError(_))
        ));
    }
}
