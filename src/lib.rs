// Meeting Metrics - speaker turn analysis for diarized recordings
//
// Consumes speaker turns produced by a diarization provider and derives:
// - Per-speaker cumulative speaking time
// - Interruption events (one speaker starting while another still speaks)
//
// The analysis engine is pure and synchronous; diarization and report
// export live at the collaborator boundary.

// Turn analysis engine
pub mod analysis;

// Diarization provider (pyannote-rs backend)
pub mod diarization;

// Report file writers
pub mod export;

pub use analysis::{
    analyze_turns, AnalysisError, AnalysisReport, InterruptionEvent, SpeakingTimeTotals, Turn,
};
