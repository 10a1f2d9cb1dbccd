// Speaking time accumulation
//
// Single linear pass over the turn sequence. Totals are order-independent:
// any permutation of the same turns produces the same map.

use super::error::AnalysisError;
use super::types::{SpeakingTimeTotals, Turn};

/// Sum speaking duration per speaker across all turns.
///
/// Unseen speakers start at 0 before their first addition. A turn with
/// `end < start` aborts the analysis with `AnalysisError::MalformedTurn`,
/// since a negative duration means the upstream diarization output is corrupt.
pub fn accumulate_speaking_times(turns: &[Turn]) -> Result<SpeakingTimeTotals, AnalysisError> {
    let mut totals = SpeakingTimeTotals::new();

    for turn in turns {
        if turn.end < turn.start {
            return Err(AnalysisError::MalformedTurn {
                speaker: turn.speaker.clone(),
                start: turn.start,
                end: turn.end,
            });
        }

        *totals.entry(turn.speaker.clone()).or_insert(0.0) += turn.duration();
    }

    Ok(totals)
}
