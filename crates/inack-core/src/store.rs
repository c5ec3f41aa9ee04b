//! Token persistence seam.

use crate::error::Result;

/// Durable storage for the single authentication token.
///
/// Absence means unauthenticated; there is nothing else to persist. The
/// file-backed implementation lives in `inack-infrastructure`.
#[async_trait::async_trait]
pub trait TokenStore: Send + Sync {
    /// Reads the persisted token. `Ok(None)` when nothing is stored.
    async fn load(&self) -> Result<Option<String>>;

    /// Persists the token, replacing any previous one.
    async fn save(&self, token: &str) -> Result<()>;

    /// Removes the persisted token.
    async fn clear(&self) -> Result<()>;
}
