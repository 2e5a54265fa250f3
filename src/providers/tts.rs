use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextToSpeech {
    Piper(PiperTts),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PiperTts {
    /// Path to the `.onnx` voice model.
    pub voice_path: PathBuf,
}

impl PiperTts {
    pub fn new(voice_path: impl Into<PathBuf>) -> Self {
        Self {
            voice_path: voice_path.into(),
        }
    }
}
