use crate::domain::model::{Lookup, Trigger, View};
use crate::domain::ports::{Display, ProfileSource};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Run one lookup and drive the display through `Loading` to a final view.
///
/// Never fails: every outcome, including transport and decode errors, ends up
/// as a view. The final view is also returned.
pub async fn fetch_and_render<S, D>(source: &S, display: &D, username: &str) -> View
where
    S: ProfileSource + ?Sized,
    D: Display + ?Sized,
{
    display.show(&View::Loading);

    let view = match source.lookup(username).await {
        Ok(Lookup::Found(profile)) => {
            tracing::info!("Loaded profile for {}", profile.login);
            View::Loaded(profile)
        }
        Ok(Lookup::NotFound) => {
            tracing::info!("User {} not found", username);
            View::NotFound {
                username: username.to_string(),
            }
        }
        Err(e) => {
            tracing::warn!(
                "Lookup for {} failed: {} (Category: {:?})",
                username,
                e,
                e.category()
            );
            View::Error {
                message: e.display_message(),
            }
        }
    };

    display.show(&view);
    view
}

/// Binds the two search events to the fetch-and-render flow.
pub struct SearchController<S, D> {
    source: Arc<S>,
    display: Arc<D>,
    in_flight: Mutex<Option<JoinHandle<View>>>,
}

impl<S, D> SearchController<S, D>
where
    S: ProfileSource + 'static,
    D: Display + 'static,
{
    pub fn new(source: Arc<S>, display: Arc<D>) -> Self {
        Self {
            source,
            display,
            in_flight: Mutex::new(None),
        }
    }

    pub fn display(&self) -> &Arc<D> {
        &self.display
    }

    /// Run a search to completion on the caller's task.
    ///
    /// Overlapping calls are not coordinated: whichever finishes last owns the display.
    pub async fn trigger(&self, input: &str, trigger: Trigger) -> View {
        let username = input.trim();
        tracing::debug!("Search triggered by {:?} for {:?}", trigger, username);

        if username.is_empty() {
            self.display.show(&View::Prompt);
            return View::Prompt;
        }

        fetch_and_render(self.source.as_ref(), self.display.as_ref(), username).await
    }

    /// Start a search in the background, aborting the one still in flight.
    pub fn spawn(&self, input: &str, trigger: Trigger) {
        let username = input.trim().to_string();
        tracing::debug!("Search spawned by {:?} for {:?}", trigger, username);

        let mut in_flight = self.lock_in_flight();
        if let Some(previous) = in_flight.take() {
            if !previous.is_finished() {
                tracing::debug!("Cancelling previous search");
            }
            previous.abort();
        }

        if username.is_empty() {
            self.display.show(&View::Prompt);
            return;
        }

        let source = Arc::clone(&self.source);
        let display = Arc::clone(&self.display);
        *in_flight = Some(tokio::spawn(async move {
            fetch_and_render(source.as_ref(), display.as_ref(), &username).await
        }));
    }

    /// Wait for the latest spawned search. `None` if there is none or it was aborted.
    pub async fn wait(&self) -> Option<View> {
        let handle = self.lock_in_flight().take()?;
        handle.await.ok()
    }

    fn lock_in_flight(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<View>>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
