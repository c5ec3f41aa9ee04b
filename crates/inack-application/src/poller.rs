//! Background refresh of the recipe list.
//!
//! The original client re-fetched every five seconds while the list was on
//! screen and never tore the timer down. Here the poll loop hands back an
//! explicit handle: `stop()` cancels deterministically, and the loop also
//! exits on its own the moment the session is no longer authenticated, so a
//! poll scheduled before logout can never repopulate the list afterwards.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

use crate::recipe_usecase::RecipeUseCase;
use crate::session_usecase::SessionUseCase;

/// How often the recipe list refreshes while polling is active.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Spawner for the background refresh loop.
pub struct RecipePoller;

impl RecipePoller {
    /// Starts polling at the given period. The first refresh fires
    /// immediately, matching the fetch-on-appear of the original client.
    pub fn spawn(
        recipes: Arc<RecipeUseCase>,
        session: Arc<SessionUseCase>,
        period: Duration,
    ) -> PollerHandle {
        let token = CancellationToken::new();
        let loop_token = token.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            tracing::debug!(period_secs = period.as_secs_f64(), "recipe poller started");

            loop {
                tokio::select! {
                    _ = loop_token.cancelled() => {
                        tracing::debug!("recipe poller stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        if !session.is_authenticated().await {
                            tracing::debug!("session ended, recipe poller exiting");
                            break;
                        }
                        if let Err(err) = recipes.refresh().await {
                            tracing::warn!(%err, "background refresh failed");
                        }
                    }
                }
            }
        });

        PollerHandle {
            token,
            handle: Some(handle),
        }
    }
}

/// Cancellable handle to a running poll loop.
///
/// Dropping the handle cancels the loop as well, so navigating away without
/// an explicit `stop()` still tears the poller down.
pub struct PollerHandle {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl PollerHandle {
    /// Stops the loop and waits until it has fully exited. After this
    /// returns, no further refresh can land.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    /// Whether the loop has already exited (e.g. after logout).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session_usecase::SessionUseCase;
    use crate::testing::{FakeApi, temp_store};

    async fn logged_in(
        api: Arc<FakeApi>,
    ) -> (tempfile::TempDir, Arc<SessionUseCase>, Arc<RecipeUseCase>) {
        let (dir, store) = temp_store();
        let session = Arc::new(SessionUseCase::new(api.clone(), store));
        session.login("alice", "secret").await.unwrap();
        let recipes = Arc::new(RecipeUseCase::new(api, session.clone()));
        (dir, session, recipes)
    }

    /// Paused-clock tests: sleeps auto-advance the clock, so this terminates
    /// as soon as the poller has fetched `n` times.
    async fn wait_for_fetches(api: &FakeApi, n: usize) {
        while api.fetches() < n {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn poller_refreshes_repeatedly() {
        let api = Arc::new(FakeApi::new());
        let (_dir, session, recipes) = logged_in(api.clone()).await;

        let handle = RecipePoller::spawn(recipes, session, Duration::from_secs(5));
        wait_for_fetches(&api, 3).await;
        handle.stop().await;

        assert!(api.fetches() >= 3);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_is_deterministic() {
        let api = Arc::new(FakeApi::new());
        let (_dir, session, recipes) = logged_in(api.clone()).await;

        let handle = RecipePoller::spawn(recipes, session, Duration::from_secs(5));
        wait_for_fetches(&api, 1).await;
        handle.stop().await;

        let after_stop = api.fetches();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.fetches(), after_stop);
    }

    #[tokio::test(start_paused = true)]
    async fn poller_exits_once_the_session_ends() {
        let api = Arc::new(FakeApi::new());
        let (_dir, session, recipes) = logged_in(api.clone()).await;

        let handle = RecipePoller::spawn(recipes, session.clone(), Duration::from_secs(5));
        wait_for_fetches(&api, 1).await;

        session.logout().await.unwrap();
        while !handle.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        // A poll scheduled before logout can never repopulate the list.
        let after_logout = api.fetches();
        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.fetches(), after_logout);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels_the_loop() {
        let api = Arc::new(FakeApi::new());
        let (_dir, session, recipes) = logged_in(api.clone()).await;

        let handle = RecipePoller::spawn(recipes, session, Duration::from_secs(5));
        wait_for_fetches(&api, 1).await;
        let before_drop = api.fetches();
        drop(handle);

        tokio::time::sleep(Duration::from_secs(60)).await;
        // At most one iteration that raced the cancellation.
        assert!(api.fetches() <= before_drop + 1);
    }
}
