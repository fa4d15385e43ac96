//! Backend generation jobs: fire-and-forget triggers plus readiness polling.
//!
//! Recommendation and simulation generation run server-side for minutes; the
//! client observes completion by re-fetching the hair-recommendation list at a
//! fixed interval until it turns non-empty. The poll stops when the condition
//! holds or when its owner cancels it, whichever comes first.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::api::types::JobRequest;
use crate::api::{ApiClient, MohittoApi};
use crate::error::ApiError;

/// Kick off simulation-image generation. No synchronous result; completion is
/// observed later via polling.
pub async fn trigger_hair_simulation<G: MohittoApi>(
    api: &G,
    job: &JobRequest,
) -> Result<(), ApiError> {
    api.run_hair_simulation(job).await
}

/// Kick off recommendation generation.
pub async fn trigger_recommendation<G: MohittoApi>(
    api: &G,
    job: &JobRequest,
) -> Result<(), ApiError> {
    api.run_recommendation(job).await
}

/// Poll until the request's hair recommendations become non-empty.
///
/// Fetch failures do not end the poll: a 404 means the results are not
/// generated yet, and transient errors are retried on the next tick. Returns
/// `true` once recommendations exist, `false` if cancelled first.
pub async fn wait_until_ready<G: MohittoApi>(
    api: &G,
    request_id: &str,
    interval: Duration,
    cancel: &mut watch::Receiver<bool>,
) -> bool {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match api.hair_recommendations(request_id).await {
                    Ok(hairs) if !hairs.is_empty() => {
                        info!("Recommendations ready for request {}", request_id);
                        return true;
                    }
                    Ok(_) => debug!("Request {} has no recommendations yet", request_id),
                    Err(ApiError::NotFound) => {
                        debug!("Request {} not generated yet (404)", request_id);
                    }
                    Err(e) => warn!("Readiness check failed, will retry: {}", e),
                }
            }
            changed = cancel.changed() => {
                if changed.is_err() || *cancel.borrow() {
                    info!("Readiness poll for request {} cancelled", request_id);
                    return false;
                }
            }
        }
    }
}

/// Owns a spawned readiness poll. Cancelling is explicit via [`stop`], and
/// dropping the watcher aborts the task, so the timer can never outlive the
/// screen that started it.
///
/// [`stop`]: RecommendationWatcher::stop
pub struct RecommendationWatcher {
    cancel: watch::Sender<bool>,
    task: Option<JoinHandle<bool>>,
}

impl RecommendationWatcher {
    pub fn spawn(api: Arc<ApiClient>, request_id: String, interval: Duration) -> Self {
        let (cancel, mut rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            wait_until_ready(api.as_ref(), &request_id, interval, &mut rx).await
        });
        Self {
            cancel,
            task: Some(task),
        }
    }

    /// Wait for the poll to finish; `true` if recommendations became ready.
    pub async fn wait(mut self) -> bool {
        match self.task.take() {
            Some(task) => task.await.unwrap_or(false),
            None => false,
        }
    }

    /// Cancel the poll and wait for the task to wind down.
    pub async fn stop(mut self) {
        let _ = self.cancel.send(true);
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RecommendationWatcher {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
