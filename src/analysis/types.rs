// Turn analysis data model
//
// Turns arrive from the diarization provider; the report leaves through
// the exporters. Everything here is immutable once constructed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One contiguous interval during which a single speaker is speaking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Start time in seconds from recording start
    pub start: f64,
    /// End time in seconds from recording start
    pub end: f64,
    /// Speaker label assigned by the diarization provider (opaque, equality only)
    pub speaker: String,
}

impl Turn {
    pub fn new(start: f64, end: f64, speaker: &str) -> Self {
        Self {
            start,
            end,
            speaker: speaker.to_string(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A detected overlap between two adjacent turns with different speakers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterruptionEvent {
    /// Start time of the interrupting turn, rounded to 2 decimals
    pub time: f64,
    /// Speaker of the later turn
    pub interrupter: String,
    /// Speaker of the earlier turn
    pub interrupted: String,
    /// Seconds the interrupting start precedes the interrupted end, rounded to 2 decimals
    pub overlap_duration: f64,
}

/// Cumulative speaking seconds per speaker.
///
/// BTreeMap keeps serialization order stable, so identical inputs always
/// produce byte-identical report files.
pub type SpeakingTimeTotals = BTreeMap<String, f64>;

/// Aggregate analysis result for one recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_speakers: usize,
    /// Speaker label to speaking seconds, rounded to 2 decimals
    pub speaking_times: SpeakingTimeTotals,
    pub total_interruptions: usize,
    /// Interruption events in detection order
    pub interruptions: Vec<InterruptionEvent>,
}

/// Round to 2 decimal places, half away from zero on the scaled value
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
