use std::{fmt, path::PathBuf};

use serde::Serialize;

/// Activation trigger that starts a conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waker {
    Hotkey(HotkeyWaker),
    Porcupine(PorcupineWaker),
}

impl Waker {
    pub fn kind(&self) -> &'static str {
        match self {
            Waker::Hotkey(_) => "hotkey",
            Waker::Porcupine(_) => "porcupine",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HotkeyWaker {
    /// Key combination such as `alt+shift+/`.
    pub hotkey: String,
}

/// Keyword spotting through Picovoice Porcupine.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct PorcupineWaker {
    #[serde(skip)]
    pub access_key: String,
    pub keyword_paths: Vec<PathBuf>,
}

impl fmt::Debug for PorcupineWaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PorcupineWaker")
            .field("access_key", &"<redacted>")
            .field("keyword_paths", &self.keyword_paths)
            .finish()
    }
}
