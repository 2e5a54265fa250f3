use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    env::EnvSnapshot,
    error::{ConfigError, Result},
    inference::InferenceBackend,
    providers::{
        FasterWhisperStt, HotkeyWaker, PiperTts, PorcupineWaker, SpeechToText, TextToSpeech, Waker,
    },
};

pub const DEFAULT_USERNAME: &str = "Izhar";
pub const DEFAULT_INFERENCE_MODEL: &str = "Qwen3-4B-Instruct-2507";
pub const DEFAULT_INFERENCE_PROVIDER: &str = "nscale";
pub const DEFAULT_WAKER: &str = "hotkey";
pub const DEFAULT_WAKE_HOTKEY: &str = "alt+shift+/";
pub const DEFAULT_WHISPER_MODEL: &str = "tiny.en";

/// Wake trigger selected by `KEVIN_WAKER`, with its companion values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WakerSetting {
    Hotkey {
        hotkey: String,
    },
    Porcupine {
        access_key: String,
        keyword_path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechInput {
    /// Prompts are typed instead of transcribed.
    Text,
    Whisper { model: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutput {
    /// Replies are printed instead of spoken.
    Text,
    Piper { voice_path: PathBuf },
}

/// Validated assistant configuration.
///
/// Built once by [`KevinConfig::load`]; the `resolve_*` methods derive provider
/// descriptors from it without mutating it.
#[derive(Clone)]
pub struct KevinConfig {
    username: String,
    system_prompt_path: Option<PathBuf>,
    include_default_system_prompt: bool,
    inference_token: String,
    inference_model: String,
    inference_provider: String,
    waker: WakerSetting,
    speech_input: SpeechInput,
    speech_output: SpeechOutput,
}

impl fmt::Debug for KevinConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KevinConfig")
            .field("username", &self.username)
            .field("system_prompt_path", &self.system_prompt_path)
            .field(
                "include_default_system_prompt",
                &self.include_default_system_prompt,
            )
            .field("inference_model", &self.inference_model)
            .field("inference_provider", &self.inference_provider)
            .field("waker", &self.waker_kind())
            .field("speech_input", &self.speech_input)
            .field("speech_output", &self.speech_output)
            .finish_non_exhaustive()
    }
}

/// Every field as read from the environment, before cross-field checks.
struct RawSettings {
    username: String,
    system_prompt_path: Option<PathBuf>,
    include_default_system_prompt: bool,
    inference_token: String,
    inference_model: String,
    inference_provider: String,
    waker: String,
    wake_hotkey: String,
    porcupine_access_key: Option<String>,
    porcupine_keyword_path: Option<PathBuf>,
    text_input: bool,
    whisper_model: String,
    text_output: bool,
    piper_voice_path: Option<PathBuf>,
}

impl RawSettings {
    fn resolve(env: &EnvSnapshot) -> Result<Self> {
        let username = env
            .string("KEVIN_USERNAME")
            .unwrap_or_else(|| DEFAULT_USERNAME.to_owned());
        let system_prompt_path = env.string("KEVIN_SYSTEM_PROMPT_PATH").map(PathBuf::from);
        // Defaults on the already-resolved prompt path.
        let include_default_system_prompt = env.boolean(
            "KEVIN_INCLUDE_DEFAULT_SYSTEM_PROMPT",
            system_prompt_path.is_none(),
        );

        let inference_token = env.required("KEVIN_HUGGINGFACE_TOKEN")?;
        let inference_model = env
            .string("KEVIN_INFERENCE_MODEL")
            .unwrap_or_else(|| DEFAULT_INFERENCE_MODEL.to_owned());
        let inference_provider = env
            .string("KEVIN_INFERENCE_PROVIDER")
            .unwrap_or_else(|| DEFAULT_INFERENCE_PROVIDER.to_owned());

        let waker = env
            .string("KEVIN_WAKER")
            .unwrap_or_else(|| DEFAULT_WAKER.to_owned())
            .to_lowercase();
        let wake_hotkey = env
            .string("KEVIN_WAKE_HOTKEY")
            .unwrap_or_else(|| DEFAULT_WAKE_HOTKEY.to_owned())
            .to_lowercase();
        let porcupine_access_key = env.string("KEVIN_PORCUPINE_ACCESS_KEY");
        let porcupine_keyword_path = env
            .string("KEVIN_PORCUPINE_KEYWORD_PATH")
            .map(PathBuf::from);

        let text_input = env.boolean("KEVIN_TEXT_INPUT", false);
        let whisper_model = env
            .string("KEVIN_FASTER_WHISPER_MODEL")
            .unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_owned())
            .to_lowercase();

        let text_output = env.boolean("KEVIN_TEXT_OUTPUT", false);
        let piper_voice_path = env.string("KEVIN_PIPER_VOICE_PATH").map(PathBuf::from);

        Ok(Self {
            username,
            system_prompt_path,
            include_default_system_prompt,
            inference_token,
            inference_model,
            inference_provider,
            waker,
            wake_hotkey,
            porcupine_access_key,
            porcupine_keyword_path,
            text_input,
            whisper_model,
            text_output,
            piper_voice_path,
        })
    }

    fn validate(self) -> Result<KevinConfig> {
        let waker = match self.waker.as_str() {
            "hotkey" => WakerSetting::Hotkey {
                hotkey: self.wake_hotkey,
            },
            "porcupine" => {
                let access_key = self.porcupine_access_key.ok_or(ConfigError::MissingCompanion {
                    key: "KEVIN_PORCUPINE_ACCESS_KEY",
                    condition: "KEVIN_WAKER=porcupine",
                })?;
                let keyword_path = self
                    .porcupine_keyword_path
                    .ok_or(ConfigError::MissingCompanion {
                        key: "KEVIN_PORCUPINE_KEYWORD_PATH",
                        condition: "KEVIN_WAKER=porcupine",
                    })?;
                WakerSetting::Porcupine {
                    access_key,
                    keyword_path,
                }
            }
            _ => return Err(ConfigError::UnknownWaker { value: self.waker }),
        };

        let speech_input = if self.text_input {
            SpeechInput::Text
        } else {
            SpeechInput::Whisper {
                model: self.whisper_model,
            }
        };

        let speech_output = if self.text_output {
            SpeechOutput::Text
        } else {
            let voice_path = self
                .piper_voice_path
                .ok_or(ConfigError::MissingCompanion {
                    key: "KEVIN_PIPER_VOICE_PATH",
                    condition: "KEVIN_TEXT_OUTPUT is not enabled",
                })?;
            SpeechOutput::Piper { voice_path }
        };

        Ok(KevinConfig {
            username: self.username,
            system_prompt_path: self.system_prompt_path,
            include_default_system_prompt: self.include_default_system_prompt,
            inference_token: self.inference_token,
            inference_model: self.inference_model,
            inference_provider: self.inference_provider,
            waker,
            speech_input,
            speech_output,
        })
    }
}

impl KevinConfig {
    pub fn load(env: &EnvSnapshot) -> Result<Self> {
        let config = RawSettings::resolve(env)?.validate()?;

        info!(
            username = %config.username,
            waker = config.waker_kind(),
            text_input = config.text_input_enabled(),
            text_output = config.text_output_enabled(),
            custom_system_prompt = config.system_prompt_path.is_some(),
            "configuration loaded"
        );
        Ok(config)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn system_prompt_path(&self) -> Option<&Path> {
        self.system_prompt_path.as_deref()
    }

    pub fn include_default_system_prompt(&self) -> bool {
        self.include_default_system_prompt
    }

    pub fn inference_token(&self) -> &str {
        &self.inference_token
    }

    pub fn inference_model(&self) -> &str {
        &self.inference_model
    }

    pub fn inference_provider(&self) -> &str {
        &self.inference_provider
    }

    pub fn waker(&self) -> &WakerSetting {
        &self.waker
    }

    pub fn waker_kind(&self) -> &'static str {
        match self.waker {
            WakerSetting::Hotkey { .. } => "hotkey",
            WakerSetting::Porcupine { .. } => "porcupine",
        }
    }

    pub fn speech_input(&self) -> &SpeechInput {
        &self.speech_input
    }

    pub fn text_input_enabled(&self) -> bool {
        matches!(self.speech_input, SpeechInput::Text)
    }

    pub fn whisper_model(&self) -> Option<&str> {
        match &self.speech_input {
            SpeechInput::Text => None,
            SpeechInput::Whisper { model } => Some(model.as_str()),
        }
    }

    pub fn speech_output(&self) -> &SpeechOutput {
        &self.speech_output
    }

    pub fn text_output_enabled(&self) -> bool {
        matches!(self.speech_output, SpeechOutput::Text)
    }

    pub fn piper_voice_path(&self) -> Option<&Path> {
        match &self.speech_output {
            SpeechOutput::Text => None,
            SpeechOutput::Piper { voice_path } => Some(voice_path.as_path()),
        }
    }

    pub fn resolve_inference(&self) -> InferenceBackend {
        InferenceBackend::new(
            self.inference_token.clone(),
            self.inference_model.clone(),
            self.inference_provider.clone(),
        )
    }

    /// `None` means the host should read typed input instead of transcribing audio.
    pub fn resolve_stt(&self) -> Option<SpeechToText> {
        match &self.speech_input {
            SpeechInput::Text => None,
            SpeechInput::Whisper { model } => {
                Some(SpeechToText::FasterWhisper(FasterWhisperStt::new(model.clone())))
            }
        }
    }

    /// `None` means the host should print replies instead of speaking them.
    pub fn resolve_tts(&self) -> Option<TextToSpeech> {
        match &self.speech_output {
            SpeechOutput::Text => None,
            SpeechOutput::Piper { voice_path } => {
                Some(TextToSpeech::Piper(PiperTts::new(voice_path.clone())))
            }
        }
    }

    pub fn resolve_waker(&self) -> Waker {
        match &self.waker {
            WakerSetting::Hotkey { hotkey } => Waker::Hotkey(HotkeyWaker {
                hotkey: hotkey.clone(),
            }),
            WakerSetting::Porcupine {
                access_key,
                keyword_path,
            } => Waker::Porcupine(PorcupineWaker {
                access_key: access_key.clone(),
                keyword_paths: vec![keyword_path.clone()],
            }),
        }
    }

    /// Reads the custom system prompt file, if one is configured.
    ///
    /// An empty path yields no prompts, though it still counts as set for
    /// `include_default_system_prompt`.
    pub fn resolve_system_prompts(&self) -> Result<Option<Vec<String>>> {
        let Some(path) = self
            .system_prompt_path
            .as_ref()
            .filter(|path| !path.as_os_str().is_empty())
        else {
            return Ok(None);
        };

        let prompt = fs::read_to_string(path).map_err(|source| ConfigError::SystemPrompt {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = prompt.len(), "read system prompt");

        Ok(Some(vec![prompt]))
    }
}
