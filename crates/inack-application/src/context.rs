//! Composition root: wires the HTTP client and the token storage into the
//! use cases.

use std::sync::Arc;
use std::time::Duration;

use inack_client::ApiClient;
use inack_core::{RecipeApi, Result, TokenStore};
use inack_infrastructure::TokenStorage;

use crate::poller::{DEFAULT_POLL_INTERVAL, PollerHandle, RecipePoller};
use crate::recipe_usecase::RecipeUseCase;
use crate::session_usecase::SessionUseCase;

/// Everything a front-end needs: the session and the recipe list, already
/// wired together and restored from persisted state.
pub struct AppContext {
    pub session: Arc<SessionUseCase>,
    pub recipes: Arc<RecipeUseCase>,
}

impl AppContext {
    /// Builds the production context: real backend, token file under the
    /// platform config directory.
    pub async fn bootstrap() -> Result<Self> {
        let api: Arc<dyn RecipeApi> = Arc::new(ApiClient::new());
        let tokens: Arc<dyn TokenStore> = Arc::new(TokenStorage::new()?);
        Self::with_parts(api, tokens).await
    }

    /// Builds a context from explicit parts (custom backend or storage).
    pub async fn with_parts(
        api: Arc<dyn RecipeApi>,
        tokens: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        let session = Arc::new(SessionUseCase::bootstrap(api.clone(), tokens).await?);
        let recipes = Arc::new(RecipeUseCase::new(api, session.clone()));
        Ok(Self { session, recipes })
    }

    /// Starts the 5-second background refresh of the recipe list.
    pub fn start_polling(&self) -> PollerHandle {
        self.start_polling_every(DEFAULT_POLL_INTERVAL)
    }

    /// Starts a background refresh with a custom period.
    pub fn start_polling_every(&self, period: Duration) -> PollerHandle {
        RecipePoller::spawn(self.recipes.clone(), self.session.clone(), period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeApi, temp_store};
    use inack_core::TokenStore;

    #[tokio::test]
    async fn with_parts_restores_the_persisted_session() {
        let api = Arc::new(FakeApi::new());
        let (_dir, store) = temp_store();
        store.save("persisted").await.unwrap();

        let ctx = AppContext::with_parts(api, store).await.unwrap();
        assert!(ctx.session.is_authenticated().await);
        assert!(ctx.recipes.recipes().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn polling_can_be_started_and_stopped() {
        let api = Arc::new(FakeApi::new());
        let (_dir, store) = temp_store();
        let ctx = AppContext::with_parts(api.clone(), store).await.unwrap();
        ctx.session.login("alice", "secret").await.unwrap();

        let handle = ctx.start_polling_every(Duration::from_secs(5));
        while api.fetches() < 1 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        handle.stop().await;
    }
}
