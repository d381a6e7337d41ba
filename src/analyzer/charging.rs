use crate::model::{AnalysisError, ChargingDuration, ChargingWindow, PriceSeries};

/// Finds the run of `duration.entries()` consecutive points with the lowest sum.
///
/// The length is an entry count at the series' own resolution. Ties keep the
/// earliest start.
pub fn cheapest_window(
    series: &PriceSeries,
    duration: ChargingDuration,
) -> Result<ChargingWindow, AnalysisError> {
    if series.is_empty() {
        return Err(AnalysisError::NoData);
    }
    let length = duration.entries();
    if series.len() < length {
        return Err(AnalysisError::InsufficientData {
            needed: length,
            available: series.len(),
        });
    }

    let prices = series.prices();
    let (start_index, min_sum) = prices
        .windows(length)
        .map(|window| window.iter().sum::<f64>())
        .enumerate()
        .fold(None::<(usize, f64)>, |best, (i, sum)| match best {
            Some((_, best_sum)) if sum >= best_sum => best,
            _ => Some((i, sum)),
        })
        .ok_or(AnalysisError::NoData)?;

    Ok(ChargingWindow {
        start_index,
        length,
        start: series.points()[start_index].start,
        average_price: min_sum / length as f64,
    })
}
