//! Shared helpers for spawning background work from the UI.

use crate::app::{App, AppEvent};
use crate::feed;
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::mpsc;

/// Run a future and turn a panic into `Err(message)`.
///
/// Keeps a panicking background task from vanishing silently: the caller
/// reports the message back to the UI as `AppEvent::TaskPanicked`.
pub(super) async fn catch_task_panic<F, T>(future: F) -> Result<T, String>
where
    F: std::future::Future<Output = T>,
{
    AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|panic| {
            if let Some(s) = panic.downcast_ref::<&'static str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            }
        })
}

/// Reset the app and fetch the feed in the background.
///
/// The result arrives as `AppEvent::FeedLoaded`. Any earlier load still in
/// flight is aborted by `App::begin_load`.
pub(super) fn spawn_feed_load(app: &mut App, event_tx: &mpsc::Sender<AppEvent>) {
    let generation = app.begin_load();
    let client = app.http_client.clone();
    let endpoint = app.endpoint.clone();
    let tx = event_tx.clone();

    tracing::debug!(generation, endpoint = %endpoint, "Spawning feed load");

    app.load_handle = Some(tokio::spawn(async move {
        let tx_panic = tx.clone();
        match catch_task_panic(feed::load(&client, &endpoint)).await {
            Ok(result) => {
                if let Err(e) = tx.send(AppEvent::FeedLoaded { generation, result }).await {
                    tracing::warn!(error = %e, event = "FeedLoaded", "Channel send failed (receiver dropped)");
                }
            }
            Err(panic_msg) => {
                tracing::error!(task = "feed_load", error = %panic_msg, "Background task panicked");
                let _ = tx_panic
                    .send(AppEvent::TaskPanicked {
                        task: "feed_load",
                        generation,
                        error: panic_msg,
                    })
                    .await;
            }
        }
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn catch_task_panic_passes_value_through() {
        assert_eq!(catch_task_panic(async { 7 }).await, Ok(7));
    }

    #[tokio::test]
    async fn catch_task_panic_reports_message() {
        let result: Result<(), String> = catch_task_panic(async {
            panic!("sheet exploded");
        })
        .await;
        assert_eq!(result, Err("sheet exploded".to_string()));
    }

    #[tokio::test]
    async fn catch_task_panic_reports_formatted_message() {
        let code = 42;
        let result: Result<(), String> = catch_task_panic(async move {
            panic!("bad row {}", code);
        })
        .await;
        assert_eq!(result, Err("bad row 42".to_string()));
    }
}
