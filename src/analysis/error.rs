use thiserror::Error;

/// Why an analysis was abandoned. Never escapes `InsightAggregator::analyze`,
/// which turns any of these into an empty result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("comment {index} is malformed: {source}")]
    MalformedComment {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("sentiment oracle failed on comment {index}: {source}")]
    Oracle {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
}
