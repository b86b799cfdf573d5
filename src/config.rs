use crate::platform::Platform;
use crate::request::Resolution;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    pub defaults: DefaultsConfig,
    pub timing: TimingConfig,
    pub artifact: ArtifactConfig,
}

/// Form values used when the command line leaves them out
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DefaultsConfig {
    pub platform: Platform,
    pub duration: u32,
    pub resolution: Resolution,
}

/// Simulated step delays, in milliseconds
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TimingConfig {
    pub generation_ms: u64,
    pub upload_ms: u64,
    pub share_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    pub output_dir: PathBuf,
    pub attribution: String,
}

pub const DEFAULT_ATTRIBUTION: &str = "Generated by AI Video Maker";

impl TimingConfig {
    pub fn generation(&self) -> Duration {
        Duration::from_millis(self.generation_ms)
    }

    pub fn upload(&self) -> Duration {
        Duration::from_millis(self.upload_ms)
    }

    pub fn share(&self) -> Duration {
        Duration::from_millis(self.share_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            generation_ms: 3000,
            upload_ms: 1500,
            share_ms: 1500,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig {
                platform: Platform::YoutubeShorts,
                duration: 30,
                resolution: Resolution::FullHd1080,
            },
            timing: TimingConfig::default(),
            artifact: ArtifactConfig {
                output_dir: PathBuf::from("output"),
                attribution: DEFAULT_ATTRIBUTION.to_string(),
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::with_defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("clipcast").required(false))
            // Allow env var overrides (e.g. CLIPCAST_TIMING__GENERATION_MS=10)
            .add_source(
                config::Environment::with_prefix("CLIPCAST")
                    .prefix_separator("_")
                    .separator("__"),
            );

        builder.build()?.try_deserialize()
    }

    fn with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("defaults.platform", "youtube-shorts")?
            .set_default("defaults.duration", 30)?
            .set_default("defaults.resolution", "1080p")?
            .set_default("timing.generation_ms", 3000)?
            .set_default("timing.upload_ms", 1500)?
            .set_default("timing.share_ms", 1500)?
            .set_default("artifact.output_dir", "output")?
            .set_default("artifact.attribution", DEFAULT_ATTRIBUTION)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
