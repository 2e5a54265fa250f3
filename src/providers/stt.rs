use serde::Serialize;

/// Quantisation hint passed to faster-whisper; keeps CPU inference cheap.
pub const WHISPER_COMPUTE_TYPE: &str = "int8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SpeechToText {
    FasterWhisper(FasterWhisperStt),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FasterWhisperStt {
    /// Model size name (`tiny.en`, `base`, ...) or a local model directory.
    pub model: String,
    pub compute_type: String,
}

impl FasterWhisperStt {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            compute_type: WHISPER_COMPUTE_TYPE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FasterWhisperStt, SpeechToText};

    #[test]
    fn serializes_with_kind_tag() {
        let stt = SpeechToText::FasterWhisper(FasterWhisperStt::new("tiny.en"));
        let value = serde_json::to_value(&stt).expect("serializable");
        assert_eq!(value["kind"], "faster_whisper");
        assert_eq!(value["model"], "tiny.en");
        assert_eq!(value["compute_type"], "int8");
    }
}
