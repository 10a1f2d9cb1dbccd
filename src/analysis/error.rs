// Analysis error type

use thiserror::Error;

/// Errors surfaced by the turn analysis engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A turn whose end precedes its start indicates corrupt upstream input;
    /// the whole analysis for the recording is aborted rather than producing
    /// silently wrong totals.
    #[error("malformed turn for speaker '{speaker}': end {end} precedes start {start}")]
    MalformedTurn {
        speaker: String,
        start: f64,
        end: f64,
    },
}
