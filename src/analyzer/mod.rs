// Analyzer module: trend classification over the price history.

pub mod trend;

pub use trend::{ThreePointAnalyzer, TrendAnalyzer};
