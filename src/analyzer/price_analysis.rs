use crate::analyzer::charging::cheapest_window;
use crate::analyzer::resolution::hourly_spans;
use crate::model::{
    AnalysisError, ChargingDuration, ChargingWindow, PricePoint, PriceSeries, PriceSpan,
    CONVERT_TO_ORE,
};

/// Trait defining the views computed over a price series.
///
/// Every operation returns `AnalysisError::NoData` for an empty series and
/// does nothing else.
pub trait Analyzer {
    fn lowest(&self, series: &PriceSeries) -> Result<PriceSpan, AnalysisError>;
    fn highest(&self, series: &PriceSeries) -> Result<PriceSpan, AnalysisError>;
    /// Mean over the raw entries, in öre.
    fn average(&self, series: &PriceSeries) -> Result<f64, AnalysisError>;
    fn charging_window(
        &self,
        series: &PriceSeries,
        duration: ChargingDuration,
    ) -> Result<ChargingWindow, AnalysisError>;
    fn sorted_desc(&self, series: &PriceSeries) -> Result<Vec<PricePoint>, AnalysisError>;
}

/// Implementation of the price analyzer.
#[derive(Debug, Default)]
pub struct AnalyzerImpl;

impl AnalyzerImpl {
    pub fn new() -> Self {
        Self
    }

    /// Left-to-right scan keeping the current pick unless `replaces` holds strictly.
    fn extreme(
        series: &PriceSeries,
        replaces: impl Fn(f64, f64) -> bool,
    ) -> Result<PriceSpan, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::NoData);
        }
        hourly_spans(series)
            .into_iter()
            .reduce(|best, span| {
                if replaces(span.price, best.price) {
                    span
                } else {
                    best
                }
            })
            .ok_or(AnalysisError::NoData)
    }
}

impl Analyzer for AnalyzerImpl {
    fn lowest(&self, series: &PriceSeries) -> Result<PriceSpan, AnalysisError> {
        Self::extreme(series, |candidate, best| candidate < best)
    }

    fn highest(&self, series: &PriceSeries) -> Result<PriceSpan, AnalysisError> {
        Self::extreme(series, |candidate, best| candidate > best)
    }

    fn average(&self, series: &PriceSeries) -> Result<f64, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::NoData);
        }
        let sum: f64 = series.points().iter().map(|p| p.sek_per_kwh).sum();
        Ok(sum / series.len() as f64 * CONVERT_TO_ORE)
    }

    fn charging_window(
        &self,
        series: &PriceSeries,
        duration: ChargingDuration,
    ) -> Result<ChargingWindow, AnalysisError> {
        cheapest_window(series, duration)
    }

    fn sorted_desc(&self, series: &PriceSeries) -> Result<Vec<PricePoint>, AnalysisError> {
        if series.is_empty() {
            return Err(AnalysisError::NoData);
        }
        let mut points = series.points().to_vec();
        points.sort_by(|a, b| b.sek_per_kwh.total_cmp(&a.sek_per_kwh));
        Ok(points)
    }
}
