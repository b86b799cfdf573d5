use crate::config::AppConfig;
use crate::pipeline::Pipeline;
use crate::request::ValidatedRequest;
use crate::state::{self, AppState};
use anyhow::Result;
use std::path::PathBuf;

/// What to do after the video is generated
#[derive(Debug, Clone, Default)]
pub struct GenerationOptions {
    pub output_dir: Option<PathBuf>,
    pub download: bool,
    pub upload: bool,
    pub share: bool,
}

pub struct GenerationContext;

impl GenerationContext {
    /// Run the full simulated lifecycle for a validated request.
    /// Returns the artifact path when one was written.
    pub async fn run(
        state: AppState,
        request: ValidatedRequest,
        config: &AppConfig,
        options: &GenerationOptions,
    ) -> Result<Option<PathBuf>> {
        let pipeline = Pipeline::new(config.timing.clone());
        let profile = request.profile();

        println!("\n⏳ Creating your {} video...", profile.display_name);
        println!("   {}", state::loading_details(&state));

        let job = pipeline.start_generation(request)?;

        // Ctrl-C cancels the job instead of killing the process mid-step
        let cancel = job.cancel_handle();
        let interrupt = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
        let result = job.wait().await;
        interrupt.abort();

        let video = match result {
            Ok(video) => video,
            Err(e) => {
                println!("\n🛑 {}", e);
                return Err(e.into());
            }
        };

        let state = state.with_status(pipeline.status());
        let preview = state::preview(&state);
        println!("\n✅ {}", state.status);
        println!(
            "   🎬 AI Generated Video {} [{}, frame {}×{}]",
            profile.dimensions_label(),
            preview.platform_label,
            preview.frame_size_px.0,
            preview.frame_size_px.1
        );
        println!("\n📝 Details:");
        for line in video.request.summarize().lines() {
            println!("   {}", line);
        }

        let mut written = None;
        if options.download {
            println!("\n📥 In the real version this would be your video file. For now, this is a simulation.");
            let dir = options
                .output_dir
                .clone()
                .unwrap_or_else(|| config.artifact.output_dir.clone());
            let path = video.artifact(&config.artifact.attribution).write_to(&dir)?;
            println!("   ✓ Saved: {}", path.display());
            written = Some(path);
        }

        if options.upload {
            println!("\n▶️ Uploading to YouTube (simulation)...");
            let status = pipeline.upload(&video).await?;
            println!("   ✓ {}", status);
        }

        if options.share {
            println!(
                "\n📱 Sharing to {} (simulation)...",
                video.request.platform.display_name()
            );
            let status = pipeline.share(&video).await?;
            println!("   ✓ {}", status);
        }

        Ok(written)
    }
}
