use crate::platform::Platform;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;
use unicode_segmentation::UnicodeSegmentation;

/// Number of prompt characters quoted in the artifact
pub const PROMPT_PREFIX_CHARS: usize = 20;

/// Placeholder file handed out in place of a rendered video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content: String,
}

impl Artifact {
    /// `prompt` is quoted as given; callers pass the trimmed, validated prompt,
    /// so leading whitespace from the raw input never reaches the file.
    pub fn new(prompt: &str, platform: Platform, attribution: &str, created_at: DateTime<Utc>) -> Self {
        let prefix: String = prompt.graphemes(true).take(PROMPT_PREFIX_CHARS).collect();

        Self {
            file_name: file_name(platform, created_at),
            content: format!(
                "AI Video Generated for: {}...\nPlatform: {}\n{}",
                prefix,
                platform.display_name(),
                attribution
            ),
        }
    }

    /// Write the artifact into `dir`, creating it if needed
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
        }

        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;

        info!(path = %path.display(), bytes = self.content.len(), "artifact written");
        Ok(path)
    }
}

/// `ai-video-<platform id>-<unix millis>.txt`
pub fn file_name(platform: Platform, created_at: DateTime<Utc>) -> String {
    format!("ai-video-{}-{}.txt", platform.id(), created_at.timestamp_millis())
}
