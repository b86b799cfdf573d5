//! Simulated generate / upload / share steps.
//!
//! Nothing is rendered or sent anywhere: each step waits for its configured
//! delay and reports success. Generation runs as a spawned task behind a
//! [`GenerationJob`] that can be cancelled. Only one generation may be in
//! flight; a second start, or an upload or share started meanwhile, is
//! rejected with [`PipelineError::Busy`].

use crate::artifact::Artifact;
use crate::config::TimingConfig;
use crate::error::PipelineError;
use crate::request::ValidatedRequest;
use crate::state::Status;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A finished (simulated) video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVideo {
    pub request: ValidatedRequest,
    pub completed_at: DateTime<Utc>,
}

impl GeneratedVideo {
    pub fn artifact(&self, attribution: &str) -> Artifact {
        Artifact::new(
            &self.request.prompt,
            self.request.platform,
            attribution,
            self.completed_at,
        )
    }
}

pub struct Pipeline {
    timing: TimingConfig,
    busy: Arc<AtomicBool>,
    status: Arc<watch::Sender<Status>>,
}

impl Pipeline {
    pub fn new(timing: TimingConfig) -> Self {
        let (status, _) = watch::channel(Status::Idle);
        Self {
            timing,
            busy: Arc::new(AtomicBool::new(false)),
            status: Arc::new(status),
        }
    }

    pub fn status(&self) -> Status {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.status.subscribe()
    }

    pub fn is_generating(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Spawn a simulated generation. Must be called inside a tokio runtime.
    pub fn start_generation(&self, request: ValidatedRequest) -> Result<GenerationJob, PipelineError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            warn!(platform = %request.platform, "generation already in progress, rejecting request");
            return Err(PipelineError::Busy);
        }

        let guard = BusyGuard {
            busy: self.busy.clone(),
            status: self.status.clone(),
            finished: false,
        };
        self.status.send_replace(Status::Processing);

        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let delay = self.timing.generation();
        debug!(?delay, platform = %request.platform, "generation started");

        let handle = tokio::spawn(async move {
            let mut guard = guard;

            tokio::select! {
                _ = tokio::time::sleep(delay) => {}
                Ok(()) = cancel_rx.changed() => {
                    info!(platform = %request.platform, "generation cancelled");
                    return Err(PipelineError::Cancelled);
                }
            }

            let profile = request.profile();
            info!(
                prompt = %request.prompt,
                duration_seconds = request.duration_seconds,
                resolution = %request.resolution,
                platform = profile.display_name,
                dimensions = %profile.dimensions_label(),
                "video generation details"
            );

            guard.finish(Status::Completed);
            Ok(GeneratedVideo {
                request,
                completed_at: Utc::now(),
            })
        });

        Ok(GenerationJob {
            handle,
            cancel: CancelHandle {
                tx: Arc::new(cancel_tx),
            },
        })
    }

    /// Pretend to upload the video to YouTube. Rejected while a generation is in flight.
    pub async fn upload(&self, video: &GeneratedVideo) -> Result<Status, PipelineError> {
        if self.is_generating() {
            warn!(platform = %video.request.platform, "generation in progress, rejecting upload");
            return Err(PipelineError::Busy);
        }

        self.status.send_replace(Status::Uploading);
        info!(platform = %video.request.platform, "uploading to YouTube (simulated)");

        tokio::time::sleep(self.timing.upload()).await;

        self.status.send_replace(Status::Uploaded);
        Ok(Status::Uploaded)
    }

    /// Pretend to share the video on the platform it was generated for.
    /// Rejected while a generation is in flight.
    pub async fn share(&self, video: &GeneratedVideo) -> Result<Status, PipelineError> {
        let platform = video.request.platform;
        if self.is_generating() {
            warn!(%platform, "generation in progress, rejecting share");
            return Err(PipelineError::Busy);
        }

        self.status.send_replace(Status::Sharing(platform));
        info!(%platform, "sharing (simulated)");

        tokio::time::sleep(self.timing.share()).await;

        self.status.send_replace(Status::Shared(platform));
        Ok(Status::Shared(platform))
    }
}

/// Releases the busy flag when the generation task ends, however it ends.
/// An unfinished task puts the status back to idle.
struct BusyGuard {
    busy: Arc<AtomicBool>,
    status: Arc<watch::Sender<Status>>,
    finished: bool,
}

impl BusyGuard {
    fn finish(&mut self, status: Status) {
        self.status.send_replace(status);
        self.finished = true;
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.status.send_replace(Status::Idle);
        }
        self.busy.store(false, Ordering::Release);
    }
}

/// Cloneable handle that cancels a running generation
#[derive(Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// A generation in progress
pub struct GenerationJob {
    handle: JoinHandle<Result<GeneratedVideo, PipelineError>>,
    cancel: CancelHandle,
}

impl GenerationJob {
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the job to finish or be cancelled
    pub async fn wait(self) -> Result<GeneratedVideo, PipelineError> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(PipelineError::Cancelled),
            Err(e) => Err(PipelineError::Worker(e.to_string())),
        }
    }
}
