use crate::platform::{self, Platform};
use crate::request::Resolution;
use crate::state::{self, AppState};
use crate::validation::DurationClamped;
use anyhow::Result;
use serde::Serialize;

pub struct PlatformsContext;

#[derive(Serialize)]
struct DescribeReport {
    id: &'static str,
    #[serde(flatten)]
    description: platform::PlatformDescription,
    max_duration_seconds: u32,
    preview: state::PreviewDisplay,
}

impl PlatformsContext {
    /// Print the platform table
    pub fn list(json: bool) -> Result<()> {
        if json {
            let profiles: Vec<_> = Platform::ALL.iter().map(|p| p.profile()).collect();
            println!("{}", serde_json::to_string_pretty(&profiles)?);
            return Ok(());
        }

        println!("📺 Supported platforms:\n");
        println!(
            "   {:<16} {:<16} {:>10} {:>6} {:>8}",
            "ID", "NAME", "SIZE", "RATIO", "MAX"
        );
        for platform in Platform::ALL {
            let profile = platform.profile();
            println!(
                "   {:<16} {:<16} {:>10} {:>6} {:>7}s",
                profile.id,
                profile.display_name,
                profile.dimensions_label(),
                profile.aspect_ratio,
                profile.max_duration_seconds
            );
        }

        Ok(())
    }

    /// Print one platform's description and preview layout
    pub fn describe(platform: Platform, json: bool) -> Result<()> {
        let preview = state::preview(&AppState::new(platform, 0, Resolution::default()));

        if json {
            let report = DescribeReport {
                id: platform.id(),
                description: platform::describe(platform),
                max_duration_seconds: platform.profile().max_duration_seconds,
                preview,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let desc = platform::describe(platform);
        println!("📺 {}", preview.platform_label);
        println!("   Size: {}", preview.size_label);
        println!("   Width: {}px", desc.width);
        println!("   Height: {}px", desc.height);
        println!("   Aspect ratio: {}", desc.aspect_ratio);
        println!(
            "   Max duration: {} seconds",
            platform.profile().max_duration_seconds
        );
        println!("   Orientation: {:?}", preview.orientation);

        Ok(())
    }

    pub fn warn_clamped(notice: &DurationClamped) {
        println!("⚠️ Warning: {}", notice);
        println!(
            "   Duration reset from {}s to {}s",
            notice.requested_seconds, notice.max_seconds
        );
    }

    pub fn print_info(state: &AppState) {
        let info = state::info(state);
        println!("📋 Selection:");
        println!("   Platform: {}", info.platform);
        println!("   Resolution: {}", info.resolution);
        println!("   Duration: {}", info.duration);
        println!("   Status: {}", info.status);
    }
}
