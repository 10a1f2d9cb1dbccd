//! Meeting Metrics CLI
//!
//! Analyzes a meeting recording for speaker metrics:
//! runs pyannote speaker diarization over a WAV file, derives per-speaker
//! speaking time and interruption events, and writes the report files.
//!
//! Usage: meeting-metrics <audio.wav> [output-dir] [meeting-name]

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::info;

use meeting_metrics::analysis::analyze_turns;
use meeting_metrics::diarization::{
    ensure_models_downloaded, load_wav_samples, DiarizationConfig, DiarizationEngine,
};
use meeting_metrics::export::{create_meeting_folder, write_interruptions_csv, write_report_json};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let audio_path = PathBuf::from(args.next().ok_or_else(|| {
        anyhow!("Usage: meeting-metrics <audio.wav> [output-dir] [meeting-name]")
    })?);
    let output_base = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));
    let meeting_name = args.next();

    if !audio_path.exists() {
        return Err(anyhow!("Audio file not found: {}", audio_path.display()));
    }

    let models_dir = default_models_dir()?;
    let (segmentation_model_path, embedding_model_path) =
        ensure_models_downloaded(&models_dir).await?;

    let config = DiarizationConfig {
        segmentation_model_path,
        embedding_model_path,
        ..Default::default()
    };
    let mut engine = DiarizationEngine::new(config)?;

    info!("Analyzing audio file: {}", audio_path.display());
    let (samples, sample_rate) = load_wav_samples(&audio_path)?;
    let turns = engine.diarize(&samples, sample_rate)?;
    info!("Found {} speech turns", turns.len());

    let report = analyze_turns(&turns)?;

    let output_dir = match meeting_name.as_deref() {
        Some(name) => create_meeting_folder(&output_base, name)?,
        None => output_base,
    };
    let json_path = write_report_json(&report, &output_dir)?;
    let csv_path = write_interruptions_csv(&report, &output_dir)?;

    info!("Analysis complete");
    info!("Found {} speakers", report.total_speakers);
    info!(
        "Total interruptions detected: {}",
        report.total_interruptions
    );
    for (speaker, seconds) in &report.speaking_times {
        info!("  {}: {:.2} seconds", speaker, seconds);
    }
    for event in report.interruptions.iter().take(5) {
        info!(
            "  At {}s: {} interrupted {}",
            event.time, event.interrupter, event.interrupted
        );
    }
    if report.interruptions.len() > 5 {
        info!(
            "  ... and {} more (see {})",
            report.interruptions.len() - 5,
            csv_path
        );
    }
    info!("Results saved to {} and {}", json_path, csv_path);

    Ok(())
}

/// Models live under the user's local data directory, shared across runs
fn default_models_dir() -> Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow!("Could not determine local data directory"))?;
    Ok(base.join("meeting-metrics").join("models"))
}
