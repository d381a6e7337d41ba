mod analyzer;
mod cli;
mod config;
mod feed;
mod model;
mod parser;
mod report;
mod series;
mod utils;

use analyzer::AnalyzerImpl;
use chrono::Utc;
use cli::{parse_args, resolve};
use config::{config_path, load_config, AppConfig};
use feed::ElprisetFeed;
use model::PriceSeries;
use parser::ElprisParser;
use series::build_series;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr; stdout carries the report only
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config(&config_path()) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error, using defaults: {}", e);
            AppConfig::default()
        }
    };
    let tz = config.tz().unwrap_or(chrono_tz::Europe::Stockholm);

    let parsed = parse_args(std::env::args().skip(1));
    let (zone, messages) = resolve(&parsed);
    for line in messages {
        println!("{}", line);
    }
    let options = parsed.options;

    let now = Utc::now();
    let date = options
        .date
        .unwrap_or_else(|| now.with_timezone(&tz).date_naive());
    let lookahead_from = options.date.is_none().then_some(now);
    info!("Zone {} from {} (rolling window: {})", zone, date, lookahead_from.is_some());

    let series = match ElprisetFeed::new(&config) {
        Ok(feed) => {
            match build_series(&feed, &ElprisParser::new(), zone, date, lookahead_from).await {
                Ok(series) => series,
                Err(e) => {
                    warn!("{}", e);
                    PriceSeries::empty()
                }
            }
        }
        Err(e) => {
            error!("Failed to initialize price feed: {}", e);
            PriceSeries::empty()
        }
    };

    let lines = report::render(
        options.mode(),
        &AnalyzerImpl::new(),
        &series,
        &config.number_format,
    );
    for line in lines {
        println!("{}", line);
    }
}
