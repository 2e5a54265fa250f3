use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::KevinConfig,
    error::Result,
    inference::InferenceBackend,
    providers::{SpeechToText, TextToSpeech, Waker},
};

/// Everything the assistant orchestrator is constructed from.
#[derive(Debug, Clone)]
pub struct AssistantParts {
    pub inference: InferenceBackend,
    pub stt: Option<SpeechToText>,
    pub tts: Option<TextToSpeech>,
    pub waker: Waker,
    pub system_prompts: Option<Vec<String>>,
    pub include_default_prompt: bool,
    pub username: String,
}

impl AssistantParts {
    pub fn from_config(config: &KevinConfig) -> Result<Self> {
        let stt = config.resolve_stt();
        if stt.is_none() {
            info!("KEVIN_TEXT_INPUT is enabled; prompts are read from the terminal");
        }

        let tts = config.resolve_tts();
        if tts.is_none() {
            info!("KEVIN_TEXT_OUTPUT is enabled; replies are printed instead of spoken");
        }

        let system_prompts = config.resolve_system_prompts()?;
        if system_prompts.is_none() && !config.include_default_system_prompt() {
            warn!("no system prompt configured and the default prompt is disabled");
        }

        Ok(Self {
            inference: config.resolve_inference(),
            stt,
            tts,
            waker: config.resolve_waker(),
            system_prompts,
            include_default_prompt: config.include_default_system_prompt(),
            username: config.username().to_owned(),
        })
    }

    /// Secret-free view of the wiring, for startup diagnostics.
    pub fn summary(&self) -> WiringSummary<'_> {
        WiringSummary {
            username: &self.username,
            inference: &self.inference,
            model_id: self.inference.model_id(),
            stt: self.stt.as_ref(),
            tts: self.tts.as_ref(),
            waker: &self.waker,
            system_prompt_count: self.system_prompts.as_ref().map_or(0, Vec::len),
            include_default_prompt: self.include_default_prompt,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WiringSummary<'a> {
    pub username: &'a str,
    pub inference: &'a InferenceBackend,
    pub model_id: String,
    pub stt: Option<&'a SpeechToText>,
    pub tts: Option<&'a TextToSpeech>,
    pub waker: &'a Waker,
    pub system_prompt_count: usize,
    pub include_default_prompt: bool,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{config::KevinConfig, env::EnvSnapshot, error::ConfigError};

    use super::AssistantParts;

    #[test]
    fn collects_every_slot() {
        let mut prompt = tempfile::NamedTempFile::new().expect("temp file");
        write!(prompt, "Be brief.").unwrap();
        let prompt_path = prompt.path().to_str().expect("utf-8 temp path").to_owned();

        let env = EnvSnapshot::from_pairs([
            ("KEVIN_HUGGINGFACE_TOKEN", "hf_secret"),
            ("KEVIN_USERNAME", "Ada"),
            ("KEVIN_SYSTEM_PROMPT_PATH", prompt_path.as_str()),
            ("KEVIN_PIPER_VOICE_PATH", "/voices/amy.onnx"),
            ("KEVIN_WAKER", "porcupine"),
            ("KEVIN_PORCUPINE_ACCESS_KEY", "pv-secret"),
            ("KEVIN_PORCUPINE_KEYWORD_PATH", "/models/kevin.ppn"),
        ]);
        let config = KevinConfig::load(&env).expect("config should load");
        let parts = AssistantParts::from_config(&config).expect("parts should build");

        assert_eq!(parts.username, "Ada");
        assert!(parts.stt.is_some());
        assert!(parts.tts.is_some());
        assert_eq!(parts.waker.kind(), "porcupine");
        assert_eq!(parts.system_prompts, Some(vec!["Be brief.".to_owned()]));
        assert!(!parts.include_default_prompt);
        assert_eq!(parts.inference.token, "hf_secret");

        let summary = serde_json::to_value(parts.summary()).expect("serializable");
        assert_eq!(summary["model_id"], "Qwen3-4B-Instruct-2507:nscale");
        assert_eq!(summary["system_prompt_count"], 1);
        assert_eq!(summary["stt"]["model"], "tiny.en");
        assert_eq!(summary["tts"]["voice_path"], "/voices/amy.onnx");

        let rendered = summary.to_string();
        assert!(!rendered.contains("hf_secret"));
        assert!(!rendered.contains("pv-secret"));
    }

    #[test]
    fn prompt_read_failure_propagates() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("prompt.txt");

        let env = EnvSnapshot::from_pairs([
            ("KEVIN_HUGGINGFACE_TOKEN", "abc"),
            ("KEVIN_TEXT_OUTPUT", "true"),
            (
                "KEVIN_SYSTEM_PROMPT_PATH",
                missing.to_str().expect("utf-8 temp path"),
            ),
        ]);
        let config = KevinConfig::load(&env).expect("config should load");

        let error = AssistantParts::from_config(&config).unwrap_err();
        assert!(matches!(error, ConfigError::SystemPrompt { .. }));
    }
}
