// Speaker diarization provider
//
// Wraps pyannote-rs segmentation and speaker embedding clustering and
// yields ordered speaker turns for the analysis engine. The ONNX models
// are downloaded on first run by the model manager.

pub mod engine;
pub mod model_manager;

pub use engine::{load_wav_samples, DiarizationConfig, DiarizationEngine};

pub use model_manager::{
    are_models_available, ensure_models_downloaded, get_model_paths, EMBEDDING_MODEL_NAME,
    SEGMENTATION_MODEL_NAME,
};
