//! The remote API seam.
//!
//! The application layer programs against this trait; the HTTP implementation
//! lives in `inack-client` and tests substitute an in-memory fake.

use crate::error::ApiError;
use crate::recipe::{Classification, Recipe};
use crate::session::Credentials;

/// The five operations the recipe backend exposes to this client.
///
/// Every implementation is stateless per call: bearer tokens are passed in
/// explicitly, the trait never holds session state. Failures come back as a
/// typed [`ApiError`]; deciding what a failure means for the session is the
/// caller's job.
#[async_trait::async_trait]
pub trait RecipeApi: Send + Sync {
    /// POST `/login`. Returns the bearer token the server issued.
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError>;

    /// POST `/register`. Succeeds only when the server acknowledged with the
    /// exact registration message.
    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError>;

    /// GET `/recipes`. The returned order is the server's.
    async fn fetch_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError>;

    /// DELETE `/recipes/{id}`.
    async fn delete_recipe(&self, token: &str, id: i64) -> Result<(), ApiError>;

    /// POST `/analyze_image` with a single multipart JPEG part.
    async fn analyze_image(&self, token: &str, jpeg: &[u8]) -> Result<Classification, ApiError>;
}
