// Diarization model manager - handles automatic downloading of pyannote models

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use futures_util::StreamExt;
use log::{debug, info};
use reqwest::Client;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Model URLs for pyannote diarization
/// These models are the official pyannote-rs releases and are compatible with pyannote-rs 0.3.x
const SEGMENTATION_MODEL_URL: &str =
    "https://github.com/thewh1teagle/pyannote-rs/releases/download/v0.1.0/segmentation-3.0.onnx";
const EMBEDDING_MODEL_URL: &str =
    "https://github.com/thewh1teagle/pyannote-rs/releases/download/v0.1.0/wespeaker_en_voxceleb_CAM++.onnx";

/// Expected file names for the models
pub const SEGMENTATION_MODEL_NAME: &str = "segmentation-3.0.onnx";
pub const EMBEDDING_MODEL_NAME: &str = "wespeaker_en_voxceleb_CAM++.onnx";

/// Check if diarization models are available
pub fn are_models_available(models_dir: &Path) -> bool {
    let (seg_path, emb_path) = get_model_paths(models_dir);
    seg_path.exists() && emb_path.exists()
}

/// Get the paths for diarization models
pub fn get_model_paths(models_dir: &Path) -> (PathBuf, PathBuf) {
    (
        models_dir.join(SEGMENTATION_MODEL_NAME),
        models_dir.join(EMBEDDING_MODEL_NAME),
    )
}

/// Download a file to its destination, logging percentage progress
async fn download_file(url: &str, dest_path: &Path, model_name: &str) -> Result<()> {
    info!("Downloading {} from {}", model_name, url);

    if let Some(parent) = dest_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let client = Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| anyhow!("Failed to start download: {}", e))?;

    if !response.status().is_success() {
        return Err(anyhow!("Download failed with status: {}", response.status()));
    }

    let total_size = response.content_length().unwrap_or(0);
    info!(
        "Downloading {} ({:.1} MB)",
        model_name,
        total_size as f64 / (1024.0 * 1024.0)
    );

    // Write to a temp file first, rename once complete
    let temp_path = dest_path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)
        .await
        .map_err(|e| anyhow!("Failed to create temp file: {}", e))?;

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();
    let mut last_progress: u8 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| anyhow!("Download error: {}", e))?;

        file.write_all(&chunk)
            .await
            .map_err(|e| anyhow!("Failed to write chunk: {}", e))?;

        downloaded += chunk.len() as u64;

        if total_size > 0 {
            let progress = ((downloaded as f64 / total_size as f64) * 100.0) as u8;
            if progress != last_progress {
                last_progress = progress;
                debug!("Download progress for {}: {}%", model_name, progress);
            }
        }
    }

    file.flush().await?;
    drop(file);

    fs::rename(&temp_path, dest_path)
        .await
        .map_err(|e| anyhow!("Failed to rename temp file: {}", e))?;

    info!("Successfully downloaded {} to {:?}", model_name, dest_path);

    Ok(())
}

/// Download diarization models if they don't exist
pub async fn ensure_models_downloaded(models_dir: &Path) -> Result<(PathBuf, PathBuf)> {
    if !models_dir.exists() {
        fs::create_dir_all(models_dir).await?;
    }

    let (seg_path, emb_path) = get_model_paths(models_dir);

    if !seg_path.exists() {
        info!("Segmentation model not found, downloading...");
        download_file(SEGMENTATION_MODEL_URL, &seg_path, "Segmentation Model").await?;
    } else {
        info!("Segmentation model already exists at {:?}", seg_path);
    }

    if !emb_path.exists() {
        info!("Embedding model not found, downloading...");
        download_file(EMBEDDING_MODEL_URL, &emb_path, "Embedding Model").await?;
    } else {
        info!("Embedding model already exists at {:?}", emb_path);
    }

    Ok((seg_path, emb_path))
}
