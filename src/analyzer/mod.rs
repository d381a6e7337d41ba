// Analyzer module: extremes, average, sorted listing and charging windows.

pub mod charging;
pub mod price_analysis;
pub mod resolution;

// Re-export the main Analyzer implementation for ease of use.
pub use price_analysis::{Analyzer, AnalyzerImpl};
