// Output boundary: turns analysis results into Swedish report lines.
use crate::analyzer::Analyzer;
use crate::cli::ReportMode;
use crate::model::{AnalysisError, ChargingDuration, PriceSeries, PriceSpan};
use crate::utils::{format_hour, format_hour_minute, format_number, NumberFormat};
use tracing::debug;

pub const NO_PRICES: &str = "Inga priser tillgängliga.";

pub fn render(
    mode: ReportMode,
    analyzer: &dyn Analyzer,
    series: &PriceSeries,
    format: &NumberFormat,
) -> Vec<String> {
    debug!("Rendering {:?} for {} prices", mode, series.len());
    match mode {
        ReportMode::Charging(duration) => render_charging(analyzer, series, duration, format),
        ReportMode::Sorted => render_sorted(analyzer, series, format),
        ReportMode::Summary => render_summary(analyzer, series, format),
    }
}

/// Lowest, highest and average; each line is computed independently.
pub fn render_summary(
    analyzer: &dyn Analyzer,
    series: &PriceSeries,
    format: &NumberFormat,
) -> Vec<String> {
    let lowest = analyzer
        .lowest(series)
        .map(|span| span_line("Lägsta pris: ", &span, format));
    let highest = analyzer
        .highest(series)
        .map(|span| span_line("Högsta pris: ", &span, format));
    let average = analyzer
        .average(series)
        .map(|ore| format!("Medelpris: {} öre", format_number(ore, format)));

    [lowest, highest, average]
        .into_iter()
        .map(|line| line.unwrap_or_else(|e| error_line(&e)))
        .collect()
}

pub fn render_sorted(
    analyzer: &dyn Analyzer,
    series: &PriceSeries,
    format: &NumberFormat,
) -> Vec<String> {
    match analyzer.sorted_desc(series) {
        Ok(points) => points
            .iter()
            .map(|p| {
                format!(
                    "{}-{} {} öre",
                    format_hour(&p.start),
                    format_hour(&p.end),
                    format_number(p.display_price(), format)
                )
            })
            .collect(),
        Err(e) => vec![error_line(&e)],
    }
}

pub fn render_charging(
    analyzer: &dyn Analyzer,
    series: &PriceSeries,
    duration: ChargingDuration,
    format: &NumberFormat,
) -> Vec<String> {
    match analyzer.charging_window(series, duration) {
        Ok(window) => vec![
            format!(
                "Påbörja laddning kl {} för {} timmars laddning",
                format_hour_minute(&window.start),
                window.length
            ),
            format!(
                "Medelpris för fönster: {} öre",
                format_number(window.display_price(), format)
            ),
        ],
        Err(e) => vec![error_line(&e)],
    }
}

fn span_line(label: &str, span: &PriceSpan, format: &NumberFormat) -> String {
    format!(
        "{}{}-{} {} öre",
        label,
        format_hour(&span.start),
        format_hour(&span.end),
        format_number(span.display_price(), format)
    )
}

fn error_line(error: &AnalysisError) -> String {
    match error {
        AnalysisError::NoData => NO_PRICES.to_string(),
        AnalysisError::InsufficientData { needed, .. } => {
            format!("För få priser för {} timmars laddning.", needed)
        }
    }
}
