use crate::feed::{PriceFeed, PriceRequest};
use crate::model::{FeedError, PriceSeries, SeriesError, Zone};
use crate::parser::Parser;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, info, warn};

/// Length of the rolling window used when no explicit date was requested.
pub const LOOKAHEAD_HOURS: i64 = 24;

/// Builds the series for `date` followed by the next calendar day.
///
/// With `now` set, each day is cut down to the intervals that have not yet
/// ended and start within the next 24 hours. Per-day fetch failures count as
/// an empty day; only a fully empty result is an error.
pub async fn build_series(
    feed: &dyn PriceFeed,
    parser: &dyn Parser,
    zone: Zone,
    date: NaiveDate,
    now: Option<DateTime<Utc>>,
) -> Result<PriceSeries, SeriesError> {
    let mut combined = PriceSeries::empty();

    for day in [Some(date), date.succ_opt()].into_iter().flatten() {
        let mut series = fetch_day(feed, parser, PriceRequest { date: day, zone }).await;
        if let Some(now) = now {
            series = filter_lookahead(&series, now);
        }
        info!("{} {}: {} prices", zone, day, series.len());
        combined = combined.concat(series);
    }

    if combined.is_empty() {
        return Err(SeriesError::DataUnavailable { zone, date });
    }
    Ok(combined)
}

async fn fetch_day(feed: &dyn PriceFeed, parser: &dyn Parser, req: PriceRequest) -> PriceSeries {
    let body = match feed.fetch(&req).await {
        Ok(body) => body,
        Err(FeedError::NotFound) => {
            info!("No prices published for {} on {}", req.zone, req.date);
            return PriceSeries::empty();
        }
        Err(e) => {
            warn!("Fetch failed for {} on {}: {}", req.zone, req.date, e);
            return PriceSeries::empty();
        }
    };

    match parser.parse(&body) {
        Ok(series) => {
            if let Some(first) = series.points().first() {
                debug!(
                    "{} {}: first slot {} SEK/kWh, {:?} EUR/kWh, EXR {:?}",
                    req.zone, req.date, first.sek_per_kwh, first.eur_per_kwh, first.exchange_rate
                );
            }
            series
        }
        Err(e) => {
            warn!("Parse failed for {} on {}: {}", req.zone, req.date, e);
            PriceSeries::empty()
        }
    }
}

/// Keeps points with `end >= now` and `start <= now + 24h`.
pub fn filter_lookahead(series: &PriceSeries, now: DateTime<Utc>) -> PriceSeries {
    let cutoff = now + Duration::hours(LOOKAHEAD_HOURS);
    let points = series
        .points()
        .iter()
        .filter(|p| p.end.with_timezone(&Utc) >= now && p.start.with_timezone(&Utc) <= cutoff)
        .cloned()
        .collect();
    PriceSeries::new(points)
}
