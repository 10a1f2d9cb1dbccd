// Report export
//
// Split into focused files:
// - utils.rs: Filename sanitization, meeting folder creation
// - report_writer.rs: JSON and CSV report file writing

pub mod report_writer;
pub mod utils;

pub use report_writer::{write_interruptions_csv, write_report_json};
pub use utils::{create_meeting_folder, sanitize_filename};
