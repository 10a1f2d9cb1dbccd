// Export - Report Writer
//
// Serializes one AnalysisReport to the two files downstream tools consume:
// a JSON summary and a CSV of interruption events.

use anyhow::Result;
use std::path::Path;

use crate::analysis::AnalysisReport;

/// Write the full analysis report as pretty-printed JSON.
///
/// Returns the path of the written file.
pub fn write_report_json(report: &AnalysisReport, output_dir: &Path) -> Result<String> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }

    let file_path = output_dir.join("meeting_report.json");
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&file_path, json_string)?;

    Ok(file_path.to_string_lossy().to_string())
}

/// Write interruption events as CSV, one row per event.
///
/// The header row is always written; a recording with zero interruptions
/// produces a header-only file.
pub fn write_interruptions_csv(report: &AnalysisReport, output_dir: &Path) -> Result<String> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
    }

    let file_path = output_dir.join("interruptions.csv");

    let mut csv = String::from("time,interrupter,interrupted,overlap_duration\n");
    for event in &report.interruptions {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            event.time, event.interrupter, event.interrupted, event.overlap_duration
        ));
    }

    std::fs::write(&file_path, csv)?;

    Ok(file_path.to_string_lossy().to_string())
}
