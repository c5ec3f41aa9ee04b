//! Recipe list, deletion and image analysis.

use std::sync::Arc;

use inack_core::{ApiError, Classification, InackError, Recipe, RecipeApi, Result};
use tokio::sync::RwLock;

use crate::session_usecase::SessionUseCase;

/// Use case for the recipe list and the operations against it.
///
/// The held list is a cache of the server's list and is only ever replaced
/// wholesale by the next successful fetch, never merged. Concurrent fetches
/// (a background poll racing a manual refresh) are allowed; the last response
/// to land wins.
pub struct RecipeUseCase {
    api: Arc<dyn RecipeApi>,
    session: Arc<SessionUseCase>,
    recipes: RwLock<Vec<Recipe>>,
}

impl RecipeUseCase {
    pub fn new(api: Arc<dyn RecipeApi>, session: Arc<SessionUseCase>) -> Self {
        Self {
            api,
            session,
            recipes: RwLock::new(Vec::new()),
        }
    }

    /// The currently cached list.
    pub async fn recipes(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    /// Fetches the authoritative list and replaces the cache with it.
    ///
    /// On failure the cache is left untouched and the session invalidation
    /// policy is applied.
    pub async fn refresh(&self) -> Result<Vec<Recipe>> {
        let token = self.require_token().await?;
        match self.api.fetch_recipes(&token).await {
            Ok(list) => {
                *self.recipes.write().await = list.clone();
                tracing::debug!(count = list.len(), "recipe list replaced");
                Ok(list)
            }
            Err(err) => {
                self.session.invalidate_on(&err).await;
                Err(err.into())
            }
        }
    }

    /// Deletes a recipe on the server, then re-fetches the list.
    ///
    /// The cached list is never edited locally: a failed delete leaves it
    /// exactly as it was, a successful one is made visible by the follow-up
    /// fetch.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let token = self.require_token().await?;
        if let Err(err) = self.api.delete_recipe(&token, id).await {
            self.session.invalidate_on(&err).await;
            return Err(err.into());
        }
        self.refresh().await?;
        Ok(())
    }

    /// Uploads a JPEG for classification.
    ///
    /// The backend generates and persists the resulting recipe server-side;
    /// callers follow up with [`Self::refresh`] to see it. No optimistic
    /// local insert happens here.
    pub async fn analyze(&self, jpeg: &[u8]) -> Result<Classification> {
        let token = self.require_token().await?;
        match self.api.analyze_image(&token, jpeg).await {
            Ok(classification) => {
                tracing::info!(
                    class = %classification.class_name,
                    confidence = classification.confidence,
                    "image analyzed"
                );
                Ok(classification)
            }
            Err(err) => {
                self.session.invalidate_on(&err).await;
                Err(err.into())
            }
        }
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .await
            .ok_or(InackError::Api(ApiError::Unauthorized))
    }
}
