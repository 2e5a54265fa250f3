use std::fmt;

use serde::Serialize;

/// Connection parameters for the Hugging Face inference router.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct InferenceBackend {
    #[serde(skip)]
    pub token: String,
    pub model: String,
    pub provider: String,
}

impl InferenceBackend {
    pub fn new(token: String, model: String, provider: String) -> Self {
        Self {
            token,
            model,
            provider,
        }
    }

    /// Model id in router form, e.g. `Qwen3-4B-Instruct-2507:nscale`.
    pub fn model_id(&self) -> String {
        format!("{}:{}", self.model, self.provider)
    }
}

impl fmt::Debug for InferenceBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceBackend")
            .field("token", &"<redacted>")
            .field("model", &self.model)
            .field("provider", &self.provider)
            .finish()
    }
}
