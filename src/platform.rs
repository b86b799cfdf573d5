use crate::error::PlatformError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static output geometry and limits for one publishing platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: &'static str,
    pub max_duration_seconds: u32,
}

/// Frame orientation derived from a profile's dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl PlatformProfile {
    pub fn orientation(&self) -> Orientation {
        if self.width < self.height {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// "W×H"
    pub fn dimensions_label(&self) -> String {
        format!("{}×{}", self.width, self.height)
    }
}

const YOUTUBE_SHORTS: PlatformProfile = PlatformProfile {
    id: "youtube-shorts",
    display_name: "YouTube Shorts",
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    max_duration_seconds: 60,
};

const TIKTOK: PlatformProfile = PlatformProfile {
    id: "tiktok",
    display_name: "TikTok",
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    max_duration_seconds: 60,
};

const FACEBOOK_REELS: PlatformProfile = PlatformProfile {
    id: "facebook-reels",
    display_name: "Facebook Reels",
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    max_duration_seconds: 60,
};

const INSTAGRAM_REELS: PlatformProfile = PlatformProfile {
    id: "instagram-reels",
    display_name: "Instagram Reels",
    width: 1080,
    height: 1920,
    aspect_ratio: "9:16",
    max_duration_seconds: 60,
};

const FACEBOOK_VIDEO: PlatformProfile = PlatformProfile {
    id: "facebook-video",
    display_name: "Facebook Video",
    width: 1280,
    height: 720,
    aspect_ratio: "16:9",
    max_duration_seconds: 300,
};

const YOUTUBE_VIDEO: PlatformProfile = PlatformProfile {
    id: "youtube-video",
    display_name: "YouTube Video",
    width: 1920,
    height: 1080,
    aspect_ratio: "16:9",
    max_duration_seconds: 300,
};

/// Supported publishing destinations. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    YoutubeShorts,
    Tiktok,
    FacebookReels,
    InstagramReels,
    FacebookVideo,
    YoutubeVideo,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::YoutubeShorts,
        Platform::Tiktok,
        Platform::FacebookReels,
        Platform::InstagramReels,
        Platform::FacebookVideo,
        Platform::YoutubeVideo,
    ];

    pub fn profile(self) -> &'static PlatformProfile {
        match self {
            Platform::YoutubeShorts => &YOUTUBE_SHORTS,
            Platform::Tiktok => &TIKTOK,
            Platform::FacebookReels => &FACEBOOK_REELS,
            Platform::InstagramReels => &INSTAGRAM_REELS,
            Platform::FacebookVideo => &FACEBOOK_VIDEO,
            Platform::YoutubeVideo => &YOUTUBE_VIDEO,
        }
    }

    pub fn id(self) -> &'static str {
        self.profile().id
    }

    pub fn display_name(self) -> &'static str {
        self.profile().display_name
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| PlatformError::UnknownPlatform(s.to_string()))
    }
}

/// Resolve a platform id to its profile. Unknown ids are an error, never a default.
pub fn lookup_profile(platform_id: &str) -> Result<&'static PlatformProfile, PlatformError> {
    platform_id.parse::<Platform>().map(Platform::profile)
}

/// Display-only projection of a profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformDescription {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: &'static str,
    pub display_name: &'static str,
}

pub fn describe(platform: Platform) -> PlatformDescription {
    let profile = platform.profile();
    PlatformDescription {
        width: profile.width,
        height: profile.height,
        aspect_ratio: profile.aspect_ratio,
        display_name: profile.display_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_profiles() {
        let expected = [
            ("youtube-shorts", 1080, 1920, "9:16", 60, "YouTube Shorts"),
            ("tiktok", 1080, 1920, "9:16", 60, "TikTok"),
            ("facebook-reels", 1080, 1920, "9:16", 60, "Facebook Reels"),
            ("instagram-reels", 1080, 1920, "9:16", 60, "Instagram Reels"),
            ("facebook-video", 1280, 720, "16:9", 300, "Facebook Video"),
            ("youtube-video", 1920, 1080, "16:9", 300, "YouTube Video"),
        ];

        for (id, width, height, ratio, max, name) in expected {
            let profile = lookup_profile(id).unwrap();
            assert_eq!(profile.id, id);
            assert_eq!(
                (
                    profile.width,
                    profile.height,
                    profile.aspect_ratio,
                    profile.max_duration_seconds,
                    profile.display_name
                ),
                (width, height, ratio, max, name)
            );
        }
    }

    #[test]
    fn test_unknown_platform() {
        let err = lookup_profile("myspace").unwrap_err();
        assert_eq!(err, PlatformError::UnknownPlatform("myspace".into()));

        // ids are exact, no case folding
        assert!(lookup_profile("TikTok").is_err());
        assert!(lookup_profile("").is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = Platform::ALL.iter().map(|p| p.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Platform::ALL.len());
    }

    #[test]
    fn test_clap_and_serde_ids_match_profile() {
        for platform in Platform::ALL {
            let value = platform.to_possible_value().unwrap();
            assert_eq!(value.get_name(), platform.id());

            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{}\"", platform.id()));
        }
    }

    #[test]
    fn test_describe() {
        let desc = describe(Platform::YoutubeVideo);
        assert_eq!(desc.width, 1920);
        assert_eq!(desc.height, 1080);
        assert_eq!(desc.aspect_ratio, "16:9");
        assert_eq!(desc.display_name, "YouTube Video");
    }

    #[test]
    fn test_orientation() {
        assert_eq!(Platform::Tiktok.profile().orientation(), Orientation::Portrait);
        assert_eq!(
            Platform::FacebookVideo.profile().orientation(),
            Orientation::Landscape
        );
        assert_eq!(Platform::FacebookVideo.profile().dimensions_label(), "1280×720");
    }
}
