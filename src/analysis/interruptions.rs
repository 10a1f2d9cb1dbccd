// Interruption detection
//
// Scans the ordered turn sequence pairwise and emits one event per adjacent
// pair where the later turn begins before the earlier one ends and the
// speakers differ. Only immediate predecessors are compared, so detection
// stays O(n); cross-talk spanning more than one intervening turn is not
// reported.

use super::types::{round_to_hundredths, InterruptionEvent, Turn};

/// Detect interruptions between adjacent turns.
///
/// Input must be ordered by start time (ties keep input order). Same-speaker
/// overlaps (self-corrections, mis-segmentation) are not interruptions.
/// Never fails; malformed durations are the accumulator's concern.
pub fn detect_interruptions(turns: &[Turn]) -> Vec<InterruptionEvent> {
    let mut events = Vec::new();

    for pair in turns.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);

        if current.start < previous.end && current.speaker != previous.speaker {
            events.push(InterruptionEvent {
                time: round_to_hundredths(current.start),
                interrupter: current.speaker.clone(),
                interrupted: previous.speaker.clone(),
                overlap_duration: round_to_hundredths(previous.end - current.start),
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_overlap_detected() {
        let turns = vec![
            Turn::new(0.0, 5.0, "SPEAKER_00"),
            Turn::new(3.0, 8.0, "SPEAKER_01"),
            Turn::new(10.0, 12.0, "SPEAKER_00"),
        ];

        let events = detect_interruptions(&turns);
        assert_eq!(
            events,
            vec![InterruptionEvent {
                time: 3.0,
                interrupter: "SPEAKER_01".to_string(),
                interrupted: "SPEAKER_00".to_string(),
                overlap_duration: 2.0,
            }]
        );
    }

    #[test]
    fn test_same_speaker_overlap_suppressed() {
        let turns = vec![
            Turn::new(0.0, 5.0, "SPEAKER_00"),
            Turn::new(3.0, 8.0, "SPEAKER_00"),
        ];

        assert!(detect_interruptions(&turns).is_empty());
    }

    #[test]
    fn test_no_overlap_no_event() {
        let turns = vec![
            Turn::new(0.0, 5.0, "SPEAKER_00"),
            Turn::new(5.0, 8.0, "SPEAKER_01"),
        ];

        // Touching endpoints are not an overlap
        assert!(detect_interruptions(&turns).is_empty());
    }

    #[test]
    fn test_zero_length_previous_never_triggers() {
        let turns = vec![
            Turn::new(2.0, 2.0, "SPEAKER_00"),
            Turn::new(2.0, 4.0, "SPEAKER_01"),
        ];

        assert!(detect_interruptions(&turns).is_empty());
    }

    #[test]
    fn test_equal_start_with_overlap_detected() {
        let turns = vec![
            Turn::new(2.0, 6.0, "SPEAKER_00"),
            Turn::new(2.0, 4.0, "SPEAKER_01"),
        ];

        let events = detect_interruptions(&turns);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, 2.0);
        assert_eq!(events[0].overlap_duration, 4.0);
    }

    #[test]
    fn test_only_adjacent_pairs_compared() {
        // The third turn overlaps the first but not its immediate
        // predecessor, so only one event is emitted.
        let turns = vec![
            Turn::new(0.0, 10.0, "SPEAKER_00"),
            Turn::new(2.0, 3.0, "SPEAKER_01"),
            Turn::new(4.0, 5.0, "SPEAKER_00"),
        ];

        let events = detect_interruptions(&turns);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].interrupter, "SPEAKER_01");
    }

    #[test]
    fn test_empty_and_single_turn() {
        assert!(detect_interruptions(&[]).is_empty());
        assert!(detect_interruptions(&[Turn::new(0.0, 5.0, "SPEAKER_00")]).is_empty());
    }

    #[test]
    fn test_overlap_duration_rounded() {
        let turns = vec![
            Turn::new(0.0, 5.339, "SPEAKER_00"),
            Turn::new(3.0011, 8.0, "SPEAKER_01"),
        ];

        let events = detect_interruptions(&turns);
        assert_eq!(events[0].time, 3.0);
        assert_eq!(events[0].overlap_duration, 2.34);
    }
}
