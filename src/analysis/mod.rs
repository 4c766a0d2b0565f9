// Insight analysis: the aggregator and the result it produces.

pub mod aggregator;
pub mod error;
pub mod result;

pub use aggregator::{AnalyzerSettings, InsightAggregator};
pub use error::AnalysisError;
pub use result::{AnalysisResult, InsightReport};
