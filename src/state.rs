use crate::platform::{Orientation, Platform};
use crate::request::{GenerationRequest, Resolution};
use crate::validation::{self, DurationClamped};
use serde::Serialize;
use std::fmt;

/// Lifecycle of the simulated pipeline as shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "platform", rename_all = "snake_case")]
pub enum Status {
    #[default]
    Idle,
    Processing,
    Completed,
    Uploading,
    Uploaded,
    Sharing(Platform),
    Shared(Platform),
}

impl Status {
    pub fn label(&self) -> String {
        match self {
            Status::Idle => "Ready".to_string(),
            Status::Processing => "Processing...".to_string(),
            Status::Completed => "Video Generated Successfully!".to_string(),
            Status::Uploading => "Uploading to YouTube...".to_string(),
            Status::Uploaded => "Uploaded to YouTube Successfully!".to_string(),
            Status::Sharing(p) => format!("Sharing to {}...", p.display_name()),
            Status::Shared(p) => format!("Shared to {} Successfully!", p.display_name()),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            Status::Processing | Status::Uploading | Status::Sharing(_)
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Everything the form holds. Updates consume the state and hand back a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppState {
    pub platform: Platform,
    pub duration_seconds: u32,
    pub resolution: Resolution,
    pub prompt: String,
    pub status: Status,
}

impl AppState {
    /// Starting state; the initial duration is already clamped for `platform`.
    pub fn new(platform: Platform, duration_seconds: u32, resolution: Resolution) -> Self {
        Self::checked(platform, duration_seconds, resolution).0
    }

    /// Like [`AppState::new`], but hands back the clamp notice for the starting duration.
    pub fn checked(
        platform: Platform,
        duration_seconds: u32,
        resolution: Resolution,
    ) -> (Self, Option<DurationClamped>) {
        let checked = validation::validate_duration(platform, duration_seconds);
        (
            Self {
                platform,
                duration_seconds: checked.seconds,
                resolution,
                prompt: String::new(),
                status: Status::Idle,
            },
            checked.clamped,
        )
    }

    /// Switching platform re-checks the current duration against the new limit.
    pub fn with_platform(self, platform: Platform) -> (Self, Option<DurationClamped>) {
        let checked = validation::validate_duration(platform, self.duration_seconds);
        (
            Self {
                platform,
                duration_seconds: checked.seconds,
                ..self
            },
            checked.clamped,
        )
    }

    pub fn with_duration(self, duration_seconds: u32) -> (Self, Option<DurationClamped>) {
        let checked = validation::validate_duration(self.platform, duration_seconds);
        (
            Self {
                duration_seconds: checked.seconds,
                ..self
            },
            checked.clamped,
        )
    }

    pub fn with_resolution(self, resolution: Resolution) -> Self {
        Self { resolution, ..self }
    }

    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// Snapshot the form as a request
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(
            self.prompt.clone(),
            self.duration_seconds,
            self.resolution,
            self.platform,
        )
    }
}

/// Preview panel contents for the selected platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewDisplay {
    pub size_label: String,
    pub platform_label: String,
    pub orientation: Orientation,
    pub container_height_px: u32,
    pub frame_size_px: (u32, u32),
}

/// Info panel contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoDisplay {
    pub platform: String,
    pub resolution: String,
    pub duration: String,
    pub status: String,
}

pub fn preview(state: &AppState) -> PreviewDisplay {
    let profile = state.platform.profile();
    let orientation = profile.orientation();
    let (container_height_px, frame_size_px) = match orientation {
        Orientation::Portrait => (500, (270, 480)),
        Orientation::Landscape => (300, (480, 270)),
    };

    PreviewDisplay {
        size_label: format!("{} ({})", profile.dimensions_label(), profile.aspect_ratio),
        platform_label: format!("{} Format", profile.display_name),
        orientation,
        container_height_px,
        frame_size_px,
    }
}

pub fn info(state: &AppState) -> InfoDisplay {
    let profile = state.platform.profile();
    InfoDisplay {
        platform: profile.display_name.to_string(),
        resolution: profile.dimensions_label(),
        duration: format!("{} seconds", state.duration_seconds),
        status: state.status.label(),
    }
}

/// Detail line shown while a video is processing
pub fn loading_details(state: &AppState) -> String {
    format!(
        "Duration: {}s | Resolution: {} | Size: {}",
        state.duration_seconds,
        state.resolution,
        state.platform.profile().dimensions_label()
    )
}
