// Turn analysis engine
//
// Split into focused files:
// - types.rs: Turn, InterruptionEvent, AnalysisReport data model
// - error.rs: analysis error type
// - speaking_time.rs: per-speaker speaking time accumulation
// - interruptions.rs: interruption detection over adjacent turns
// - report.rs: report assembly and one-call orchestration

pub mod error;
pub mod interruptions;
pub mod report;
pub mod speaking_time;
pub mod types;

pub use error::AnalysisError;
pub use interruptions::detect_interruptions;
pub use report::{analyze_turns, build_report};
pub use speaking_time::accumulate_speaking_times;
pub use types::{round_to_hundredths, AnalysisReport, InterruptionEvent, SpeakingTimeTotals, Turn};
