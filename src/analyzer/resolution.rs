use crate::model::{PricePoint, PriceSeries, PriceSpan, Resolution};

pub const QUARTERS_PER_HOUR: usize = 4;

/// Groups quarter-hour points into hourly buckets priced at the mean of their quarters.
pub fn hourly_buckets(points: &[PricePoint]) -> Vec<PriceSpan> {
    points
        .chunks_exact(QUARTERS_PER_HOUR)
        .map(|quarters| {
            let sum: f64 = quarters.iter().map(|q| q.sek_per_kwh).sum();
            PriceSpan {
                start: quarters[0].start,
                end: quarters[QUARTERS_PER_HOUR - 1].end,
                price: sum / QUARTERS_PER_HOUR as f64,
            }
        })
        .collect()
}

/// Spans used for extreme-price lookups: hourly buckets for a 96-entry day,
/// the raw points otherwise.
pub fn hourly_spans(series: &PriceSeries) -> Vec<PriceSpan> {
    match series.resolution() {
        Resolution::QuarterHour => hourly_buckets(series.points()),
        Resolution::Hourly => series
            .points()
            .iter()
            .map(|p| PriceSpan {
                start: p.start,
                end: p.end,
                price: p.sek_per_kwh,
            })
            .collect(),
    }
}
