// Report assembly
//
// Combines accumulator and detector output into one AnalysisReport.
// Pure and deterministic: identical inputs serialize byte-identically.

use super::error::AnalysisError;
use super::interruptions::detect_interruptions;
use super::speaking_time::accumulate_speaking_times;
use super::types::{round_to_hundredths, AnalysisReport, InterruptionEvent, SpeakingTimeTotals, Turn};

/// Assemble the analysis report from accumulated totals and detected events.
///
/// Speaking times are rounded to 2 decimals here; event fields were already
/// rounded at detection.
pub fn build_report(
    speaking_times: SpeakingTimeTotals,
    interruptions: Vec<InterruptionEvent>,
) -> AnalysisReport {
    let speaking_times: SpeakingTimeTotals = speaking_times
        .into_iter()
        .map(|(speaker, total)| (speaker, round_to_hundredths(total)))
        .collect();

    AnalysisReport {
        total_speakers: speaking_times.len(),
        speaking_times,
        total_interruptions: interruptions.len(),
        interruptions,
    }
}

/// Run the full analysis for one recording: accumulate speaking times,
/// detect interruptions, build the report.
///
/// Fails before any report exists if the accumulator rejects a turn.
pub fn analyze_turns(turns: &[Turn]) -> Result<AnalysisReport, AnalysisError> {
    let speaking_times = accumulate_speaking_times(turns)?;
    let interruptions = detect_interruptions(turns);

    Ok(build_report(speaking_times, interruptions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_turns() -> Vec<Turn> {
        vec![
            Turn::new(0.0, 5.0, "SPEAKER_00"),
            Turn::new(3.0, 8.0, "SPEAKER_01"),
            Turn::new(10.0, 12.0, "SPEAKER_00"),
        ]
    }

    #[test]
    fn test_full_analysis() {
        let report = analyze_turns(&sample_turns()).unwrap();

        assert_eq!(report.total_speakers, 2);
        assert_eq!(report.speaking_times["SPEAKER_00"], 7.0);
        assert_eq!(report.speaking_times["SPEAKER_01"], 5.0);
        assert_eq!(report.total_interruptions, 1);
        assert_eq!(report.interruptions[0].time, 3.0);
        assert_eq!(report.interruptions[0].overlap_duration, 2.0);
    }

    #[test]
    fn test_empty_input_is_valid() {
        let report = analyze_turns(&[]).unwrap();

        assert_eq!(report.total_speakers, 0);
        assert!(report.speaking_times.is_empty());
        assert_eq!(report.total_interruptions, 0);
        assert!(report.interruptions.is_empty());
    }

    #[test]
    fn test_malformed_turn_yields_no_report() {
        let turns = vec![Turn::new(3.0, 1.0, "SPEAKER_00")];
        assert!(analyze_turns(&turns).is_err());
    }

    #[test]
    fn test_deterministic_serialization() {
        let first = analyze_turns(&sample_turns()).unwrap();
        let second = analyze_turns(&sample_turns()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_totals_rounded_in_report() {
        let turns = vec![
            Turn::new(0.0, 1.111, "SPEAKER_00"),
            Turn::new(2.0, 3.1, "SPEAKER_00"),
        ];

        let report = analyze_turns(&turns).unwrap();
        assert_eq!(report.speaking_times["SPEAKER_00"], 2.21);
    }

    #[test]
    fn test_report_json_shape() {
        let report = analyze_turns(&sample_turns()).unwrap();
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["total_speakers"], 2);
        assert_eq!(value["total_interruptions"], 1);
        assert!(value["speaking_times"].is_object());
        assert_eq!(value["interruptions"][0]["interrupter"], "SPEAKER_01");
        assert_eq!(value["interruptions"][0]["interrupted"], "SPEAKER_00");
    }
}
