pub mod artifact;
pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod platform;
pub mod request;
pub mod state;
pub mod validation;

pub use artifact::Artifact;
pub use crate::config::AppConfig;
pub use error::{PipelineError, PlatformError, PromptError};
pub use pipeline::{GeneratedVideo, GenerationJob, Pipeline};
pub use platform::{describe, lookup_profile, Platform, PlatformProfile};
pub use request::{GenerationRequest, Resolution, ValidatedRequest};
pub use state::{AppState, Status};
pub use validation::{validate_duration, validate_prompt, DurationClamped, ValidatedDuration};
