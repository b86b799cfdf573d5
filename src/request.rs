use crate::error::PromptError;
use crate::platform::{Platform, PlatformProfile};
use crate::validation::{self, DurationClamped};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested output quality label. Display only; geometry comes from the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum Resolution {
    #[serde(rename = "720p")]
    #[value(name = "720p")]
    Hd720,
    #[default]
    #[serde(rename = "1080p")]
    #[value(name = "1080p")]
    FullHd1080,
    #[serde(rename = "4k")]
    #[value(name = "4k")]
    Uhd4k,
}

impl Resolution {
    pub fn label(self) -> &'static str {
        match self {
            Resolution::Hd720 => "720p",
            Resolution::FullHd1080 => "1080p",
            Resolution::Uhd4k => "4k",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw user input for one generation action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub duration_seconds: u32,
    #[serde(default)]
    pub resolution: Resolution,
    pub platform: Platform,
}

/// A request that passed prompt validation, with its duration clamped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedRequest {
    pub prompt: String,
    pub duration_seconds: u32,
    pub resolution: Resolution,
    pub platform: Platform,
    pub clamped: Option<DurationClamped>,
}

impl GenerationRequest {
    pub fn new(
        prompt: impl Into<String>,
        duration_seconds: u32,
        resolution: Resolution,
        platform: Platform,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            duration_seconds,
            resolution,
            platform,
        }
    }

    /// Prompt errors abort; an over-long duration is corrected and noted.
    pub fn validate(self) -> Result<ValidatedRequest, PromptError> {
        let prompt = validation::validate_prompt(&self.prompt)?;
        let duration = validation::validate_duration(self.platform, self.duration_seconds);

        Ok(ValidatedRequest {
            prompt,
            duration_seconds: duration.seconds,
            resolution: self.resolution,
            platform: self.platform,
            clamped: duration.clamped,
        })
    }
}

impl ValidatedRequest {
    pub fn profile(&self) -> &'static PlatformProfile {
        self.platform.profile()
    }

    /// Get a summary of the request
    pub fn summarize(&self) -> String {
        let profile = self.profile();
        let mut summary = String::new();
        summary.push_str(&format!("Prompt: {}\n", self.prompt));
        summary.push_str(&format!("Duration: {} seconds\n", self.duration_seconds));
        summary.push_str(&format!("Resolution: {}\n", self.resolution));
        summary.push_str(&format!("Platform: {}\n", profile.display_name));
        summary.push_str(&format!("Dimensions: {}\n", profile.dimensions_label()));
        summary
    }
}
