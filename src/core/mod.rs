//! Content acquisition pipeline
//!
//! mood -> generator -> validator, with the catalog fallback behind every failure.

pub mod catalog;
pub mod errors;
pub mod fallback;
pub mod orchestrator;
pub mod session;
pub mod validator;

pub use catalog::{MoodCatalog, MoodFallback};
pub use errors::{ContentError, ContentResult};
pub use fallback::FallbackSelector;
pub use orchestrator::{ContentOrchestrator, ContentSource, LoadState, OrchestratorSettings};
pub use session::{Session, SessionSnapshot};
pub use validator::validate;
