//! Session lifecycle: login, register, logout and forced invalidation.
//!
//! The session is an explicit context object handed to whoever needs it, not
//! process-wide mutable state. It is constructed once at startup from the
//! persisted token and owns the only mutable copy of the session for its
//! lifetime.

use std::sync::Arc;

use inack_core::{ApiError, Credentials, RecipeApi, Result, Session, TokenStore};
use tokio::sync::RwLock;

/// Use case for managing the authentication session.
///
/// Couples the in-memory [`Session`] with the persisted token so the two can
/// never drift: every mutation writes through to the store.
pub struct SessionUseCase {
    api: Arc<dyn RecipeApi>,
    tokens: Arc<dyn TokenStore>,
    session: RwLock<Session>,
}

impl SessionUseCase {
    /// Creates a use case with a fresh, unauthenticated session.
    pub fn new(api: Arc<dyn RecipeApi>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            tokens,
            session: RwLock::new(Session::new()),
        }
    }

    /// Creates a use case with the session restored from persisted storage.
    ///
    /// A missing persisted token simply yields an unauthenticated session.
    pub async fn bootstrap(api: Arc<dyn RecipeApi>, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let persisted = tokens.load().await?;
        if persisted.is_some() {
            tracing::info!("restored authentication session from storage");
        }
        Ok(Self {
            api,
            tokens,
            session: RwLock::new(Session::from_token(persisted)),
        })
    }

    /// Whether the session currently holds a token.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// The current bearer token, if any.
    pub async fn token(&self) -> Option<String> {
        self.session.read().await.token().map(str::to_string)
    }

    /// Logs in against the backend and stores the issued token.
    ///
    /// On any failure the session is left exactly as it was: no token change,
    /// still unauthenticated if it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let credentials = Credentials::new(username, password);
        let token = self.api.login(&credentials).await.map_err(|err| {
            tracing::warn!(%err, "login failed");
            err
        })?;

        self.tokens.save(&token).await?;
        self.session.write().await.set_token(token);
        tracing::info!("login succeeded");
        Ok(())
    }

    /// Registers a new account. Does not log in and touches no session state.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        let credentials = Credentials::new(username, password);
        self.api.register(&credentials).await.map_err(|err| {
            tracing::warn!(%err, "registration failed");
            err.into()
        })
    }

    /// Ends the session: clears the in-memory token and the persisted one.
    ///
    /// There is no server-side revocation call to make. The in-memory state
    /// is cleared first so the session reads as unauthenticated even if
    /// removing the file fails.
    pub async fn logout(&self) -> Result<()> {
        self.session.write().await.clear();
        self.tokens.clear().await?;
        tracing::info!("logged out");
        Ok(())
    }

    /// Applies the invalidation policy after a failed authorized call.
    ///
    /// Any response the server produced with a non-success status ends the
    /// session; transport and decode failures leave it alone. The policy
    /// lives here, visible to callers, instead of inside the HTTP client.
    pub async fn invalidate_on(&self, err: &ApiError) {
        if !err.is_session_invalidating() {
            return;
        }
        tracing::warn!(%err, "session invalidated by server response");
        if let Err(storage_err) = self.logout().await {
            tracing::error!(%storage_err, "failed to clear persisted token during invalidation");
        }
    }
}
