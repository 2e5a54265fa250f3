pub mod assistant;
pub mod config;
pub mod env;
pub mod error;
pub mod inference;
pub mod providers;

pub use assistant::AssistantParts;
pub use config::KevinConfig;
pub use error::{ConfigError, Result};
