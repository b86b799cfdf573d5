use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clipcast::context::{GenerationContext, GenerationOptions, PlatformsContext};
use clipcast::state::{self, AppState};
use clipcast::{AppConfig, Platform, Resolution};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clipcast")]
#[command(about = "AI Video Generator (simulated)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported platforms
    Platforms {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show output geometry and preview layout for a platform
    Describe {
        #[arg(value_enum)]
        platform: Platform,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a prompt and duration without generating anything
    Validate {
        /// Video idea (at least 10 characters)
        #[arg(value_name = "PROMPT")]
        prompt: String,

        #[arg(short, long, value_enum)]
        platform: Option<Platform>,

        /// Duration in seconds
        #[arg(short, long)]
        duration: Option<u32>,
    },

    /// Simulate generating a video
    Generate {
        /// Video idea (at least 10 characters)
        #[arg(value_name = "PROMPT")]
        prompt: String,

        #[arg(short, long, value_enum)]
        platform: Option<Platform>,

        /// Duration in seconds
        #[arg(short, long)]
        duration: Option<u32>,

        #[arg(short, long, value_enum)]
        resolution: Option<Resolution>,

        /// Directory for the simulated video file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip writing the simulated video file
        #[arg(long)]
        no_download: bool,

        /// Simulate a YouTube upload afterwards
        #[arg(long)]
        upload: bool,

        /// Simulate sharing to the selected platform afterwards
        #[arg(long)]
        share: bool,
    },

    /// Print the effective configuration
    Config,
}

/// Build the form state from config defaults and command-line choices,
/// reporting any duration that had to be clamped.
fn build_state(
    config: &AppConfig,
    prompt: String,
    platform: Option<Platform>,
    duration: Option<u32>,
    resolution: Option<Resolution>,
) -> AppState {
    let defaults = &config.defaults;
    let (state, notice) = AppState::checked(
        platform.unwrap_or(defaults.platform),
        duration.unwrap_or(defaults.duration),
        resolution.unwrap_or(defaults.resolution),
    );
    if let Some(notice) = notice {
        PlatformsContext::warn_clamped(&notice);
    }

    state.with_prompt(prompt)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load().context("Failed to load configuration")?;

    match cli.command {
        Some(Commands::Platforms { json }) => PlatformsContext::list(json)?,
        Some(Commands::Describe { platform, json }) => PlatformsContext::describe(platform, json)?,
        Some(Commands::Validate {
            prompt,
            platform,
            duration,
        }) => {
            let state = build_state(&config, prompt, platform, duration, None);
            PlatformsContext::print_info(&state);

            if let Err(e) = state.request().validate() {
                eprintln!("\n❌ {}", e);
                std::process::exit(1);
            }
            println!("\n✅ Validation complete");
        }
        Some(Commands::Generate {
            prompt,
            platform,
            duration,
            resolution,
            output,
            no_download,
            upload,
            share,
        }) => {
            println!("🎬 AI Video Generator (simulation)\n");

            let state = build_state(&config, prompt, platform, duration, resolution);
            PlatformsContext::print_info(&state);

            let request = match state.request().validate() {
                Ok(request) => request,
                Err(e) => {
                    eprintln!("\n❌ {}", e);
                    std::process::exit(1);
                }
            };

            let options = GenerationOptions {
                output_dir: output,
                download: !no_download,
                upload,
                share,
            };
            GenerationContext::run(state, request, &config, &options).await?;
        }
        Some(Commands::Config) => {
            print!("{}", config.to_toml()?);
        }
        None => {
            println!("🎬 AI Video Generator (simulation)\n");

            let defaults = &config.defaults;
            let (state, notice) =
                AppState::checked(defaults.platform, defaults.duration, defaults.resolution);
            if let Some(notice) = notice {
                PlatformsContext::warn_clamped(&notice);
            }
            let preview = state::preview(&state);
            println!("📺 {} ({})", preview.platform_label, preview.size_label);
            PlatformsContext::print_info(&state);

            println!("\n💡 Generate a video: clipcast generate \"your video idea\" --platform tiktok");
            println!("   List platforms:   clipcast platforms");
        }
    }

    Ok(())
}
