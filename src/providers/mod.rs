//! Provider descriptors for the assistant's capability slots.
//!
//! Each slot is a closed set of variants. The descriptors carry the parameters
//! the runtime implementations are constructed from; they do no audio work.

mod stt;
mod tts;
mod waker;

pub use stt::{FasterWhisperStt, SpeechToText, WHISPER_COMPUTE_TYPE};
pub use tts::{PiperTts, TextToSpeech};
pub use waker::{HotkeyWaker, PorcupineWaker, Waker};
