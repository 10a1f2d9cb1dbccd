// Diarization engine using pyannote-rs
// Wraps segmentation and speaker embedding extraction

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use pyannote_rs::{get_segments, EmbeddingExtractor, EmbeddingManager};

use crate::analysis::Turn;

/// Configuration for diarization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiarizationConfig {
    /// Path to segmentation model (segmentation-3.0.onnx)
    pub segmentation_model_path: PathBuf,
    /// Path to speaker embedding model (wespeaker_en_voxceleb_CAM++.onnx)
    pub embedding_model_path: PathBuf,
    /// Maximum number of speakers to track
    pub max_speakers: usize,
    /// Similarity threshold for speaker matching (0.0 to 1.0)
    pub similarity_threshold: f32,
}

impl Default for DiarizationConfig {
    fn default() -> Self {
        Self {
            segmentation_model_path: PathBuf::new(),
            embedding_model_path: PathBuf::new(),
            max_speakers: 10,
            similarity_threshold: 0.5,
        }
    }
}

/// Diarization engine that partitions audio into speaker turns
pub struct DiarizationEngine {
    config: DiarizationConfig,
    embedding_extractor: EmbeddingExtractor,
    embedding_manager: EmbeddingManager,
}

impl DiarizationEngine {
    /// Create a new diarization engine
    pub fn new(config: DiarizationConfig) -> Result<Self> {
        info!("Initializing diarization engine");
        debug!("Segmentation model: {:?}", config.segmentation_model_path);
        debug!("Embedding model: {:?}", config.embedding_model_path);

        if !config.segmentation_model_path.exists() {
            return Err(anyhow!(
                "Segmentation model not found: {:?}",
                config.segmentation_model_path
            ));
        }
        if !config.embedding_model_path.exists() {
            return Err(anyhow!(
                "Embedding model not found: {:?}",
                config.embedding_model_path
            ));
        }

        // pyannote-rs uses eyre, convert to anyhow
        let embedding_extractor = EmbeddingExtractor::new(&config.embedding_model_path)
            .map_err(|e| anyhow!("Failed to create embedding extractor: {}", e))?;

        let embedding_manager = EmbeddingManager::new(config.max_speakers);

        info!("Diarization engine initialized successfully");

        Ok(Self {
            config,
            embedding_extractor,
            embedding_manager,
        })
    }

    /// Run diarization on 16-bit audio samples and return speaker turns
    /// ordered by start time.
    pub fn diarize(&mut self, samples: &[i16], sample_rate: u32) -> Result<Vec<Turn>> {
        info!(
            "Running diarization on {} samples at {} Hz",
            samples.len(),
            sample_rate
        );

        let segments_iter =
            get_segments(samples, sample_rate, &self.config.segmentation_model_path)
                .map_err(|e| anyhow!("Failed to run segmentation: {}", e))?;

        let mut turns = Vec::new();

        for segment_result in segments_iter {
            let segment = match segment_result {
                Ok(seg) => seg,
                Err(e) => {
                    warn!("Failed to process segment: {}", e);
                    continue;
                }
            };

            let embedding: Vec<f32> = match self.embedding_extractor.compute(&segment.samples) {
                Ok(iter) => iter.collect(),
                Err(e) => {
                    warn!("Failed to compute embedding for segment: {}", e);
                    continue;
                }
            };

            turns.push(Turn {
                start: segment.start,
                end: segment.end,
                speaker: self.speaker_label(embedding),
            });
        }

        turns.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));

        info!("Diarization complete: {} turns", turns.len());

        Ok(turns)
    }

    /// Cluster an embedding into a session speaker label
    fn speaker_label(&mut self, embedding: Vec<f32>) -> String {
        match self
            .embedding_manager
            .search_speaker(embedding, self.config.similarity_threshold)
        {
            Some(speaker_idx) => format!("SPEAKER_{:02}", speaker_idx),
            None => {
                warn!(
                    "Max speakers ({}) reached, segment assigned to catch-all label",
                    self.config.max_speakers
                );
                "SPEAKER_UNKNOWN".to_string()
            }
        }
    }
}

/// Load 16-bit samples and the sample rate from a WAV file.
///
/// Float WAVs are converted to i16, the format pyannote-rs consumes.
pub fn load_wav_samples(path: &Path) -> Result<(Vec<i16>, u32)> {
    let mut reader = hound::WavReader::open(path)
        .map_err(|e| anyhow!("Failed to open WAV file {:?}: {}", path, e))?;
    let spec = reader.spec();

    let samples: Vec<i16> = match spec.sample_format {
        hound::SampleFormat::Int => reader
            .samples::<i16>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| anyhow!("Failed to read WAV samples: {}", e))?,
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .map(|s| s.map(|v| (v * 32767.0).clamp(-32768.0, 32767.0) as i16))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| anyhow!("Failed to read WAV samples: {}", e))?,
    };

    debug!(
        "Loaded {} samples at {} Hz from {:?}",
        samples.len(),
        spec.sample_rate,
        path
    );

    Ok((samples, spec.sample_rate))
}
