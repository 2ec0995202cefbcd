//! Background task event handling.

use crate::app::{App, AppEvent};

/// Apply an event from a background task to the app state.
pub(super) fn handle_app_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::FeedLoaded { generation, result } => {
            app.finish_load(generation, result);
        }
        AppEvent::TaskPanicked {
            task,
            generation,
            error,
        } => {
            tracing::error!(task, generation, error, "Background task panicked");
            if generation != app.load_generation {
                tracing::debug!(
                    generation,
                    current = app.load_generation,
                    "Ignoring panic from superseded load"
                );
                return;
            }
            app.loading = false;
            app.load_handle = None;
            app.set_error(format!("Internal error in {} task", task));
        }
    }
    app.needs_redraw = true;
}
