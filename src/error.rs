use thiserror::Error;

/// Errors raised while resolving a platform identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Unknown platform '{0}'")]
    UnknownPlatform(String),
}

/// Errors raised by prompt validation. Both are recoverable: fix the prompt and retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("Please enter a video idea/prompt!")]
    EmptyPrompt,

    #[error("Please enter a more detailed prompt (at least {minimum} characters, got {length})")]
    PromptTooShort { length: usize, minimum: usize },
}

/// Errors raised by the simulated pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// A generation job is already in flight
    #[error("A video is already being generated")]
    Busy,

    #[error("Video generation was cancelled")]
    Cancelled,

    #[error("Generation worker failed: {0}")]
    Worker(String),
}
