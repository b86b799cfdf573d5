use crate::error::{PlatformError, PromptError};
use crate::platform::Platform;
use serde::Serialize;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum length of a trimmed prompt, in user-perceived characters
pub const MIN_PROMPT_CHARS: usize = 10;

/// Notice raised when a requested duration was cut down to the platform maximum
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DurationClamped {
    pub platform: Platform,
    pub requested_seconds: u32,
    pub max_seconds: u32,
}

impl fmt::Display for DurationClamped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} maximum duration is {} seconds. Please select a shorter duration.",
            self.platform.display_name(),
            self.max_seconds
        )
    }
}

/// Result of checking a duration against a platform limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedDuration {
    pub seconds: u32,
    pub clamped: Option<DurationClamped>,
}

impl ValidatedDuration {
    pub fn was_clamped(&self) -> bool {
        self.clamped.is_some()
    }
}

/// Clamp `requested_seconds` to the platform's maximum. Idempotent.
pub fn validate_duration(platform: Platform, requested_seconds: u32) -> ValidatedDuration {
    let max_seconds = platform.profile().max_duration_seconds;

    if requested_seconds <= max_seconds {
        return ValidatedDuration {
            seconds: requested_seconds,
            clamped: None,
        };
    }

    ValidatedDuration {
        seconds: max_seconds,
        clamped: Some(DurationClamped {
            platform,
            requested_seconds,
            max_seconds,
        }),
    }
}

/// Same as [`validate_duration`] for a raw platform id
pub fn validate_duration_for(
    platform_id: &str,
    requested_seconds: u32,
) -> Result<ValidatedDuration, PlatformError> {
    let platform: Platform = platform_id.parse()?;
    Ok(validate_duration(platform, requested_seconds))
}

/// Trim the prompt and check it is long enough to describe a video
pub fn validate_prompt(raw: &str) -> Result<String, PromptError> {
    let prompt = raw.trim();

    if prompt.is_empty() {
        return Err(PromptError::EmptyPrompt);
    }

    let length = prompt.graphemes(true).count();
    if length < MIN_PROMPT_CHARS {
        return Err(PromptError::PromptTooShort {
            length,
            minimum: MIN_PROMPT_CHARS,
        });
    }

    Ok(prompt.to_string())
}
