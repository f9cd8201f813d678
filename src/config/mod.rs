//! Configuration module for moodmuse
//!
//! Path management plus the user settings file.

mod paths;
mod user_config;

pub use paths::Paths;
pub use user_config::{UserConfig, API_KEY_ENV, USE_MOCK_DATA_ENV};
