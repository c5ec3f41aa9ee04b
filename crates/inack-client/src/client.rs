//! HTTP implementation of the recipe backend API.
//!
//! One fixed base origin, bearer-token authorization on the protected
//! endpoints, JSON bodies everywhere except the multipart image upload. No
//! retries and no backoff: a failed call is reported once, typed, to the
//! caller.

use inack_core::{ApiError, Classification, Credentials, Recipe, RecipeApi};
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::multipart;

/// The backend origin is a compiled-in constant; there is no configuration
/// surface for it.
const DEFAULT_BASE_URL: &str = "https://backend.inack.marijndemul.nl";

/// Exact acknowledgement the server sends for a successful registration.
const REGISTER_SUCCESS_MESSAGE: &str = "User registered successfully";

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct RegisterResponse {
    message: String,
}

/// Stateless client for the recipe backend.
///
/// Holds no session state; callers pass the bearer token into each protected
/// operation.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client against the production backend.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom origin (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Applies the uniform response discipline: transport failures and
    /// non-success statuses become typed errors, everything else passes
    /// through for decoding.
    fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "backend answered with an error status");
            return Err(ApiError::from_status(status.as_u16()));
        }
        Ok(response)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;
        Self::check(response)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RecipeApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        let response = self
            .send(self.http.post(self.url("/login")).json(credentials))
            .await?;

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))?;
        Ok(parsed.access_token)
    }

    async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let response = self
            .send(self.http.post(self.url("/register")).json(credentials))
            .await?;

        let parsed: RegisterResponse = response
            .json()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))?;

        // Success is an exact match on the acknowledgement message.
        if parsed.message == REGISTER_SUCCESS_MESSAGE {
            Ok(())
        } else {
            Err(ApiError::unexpected(parsed.message))
        }
    }

    async fn fetch_recipes(&self, token: &str) -> Result<Vec<Recipe>, ApiError> {
        let response = self
            .send(
                self.http
                    .get(self.url("/recipes"))
                    .header("Authorization", format!("Bearer {token}")),
            )
            .await?;

        response
            .json()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))
    }

    async fn delete_recipe(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.send(
            self.http
                .delete(self.url(&format!("/recipes/{id}")))
                .header("Authorization", format!("Bearer {token}")),
        )
        .await?;
        Ok(())
    }

    async fn analyze_image(&self, token: &str, jpeg: &[u8]) -> Result<Classification, ApiError> {
        let boundary = multipart::random_boundary();
        let body = multipart::encode_jpeg_part(&boundary, jpeg);

        let response = self
            .send(
                self.http
                    .post(self.url("/analyze_image"))
                    .header("Authorization", format!("Bearer {token}"))
                    .header("Content-Type", multipart::content_type(&boundary))
                    .body(body),
            )
            .await?;

        response
            .json()
            .await
            .map_err(|err| ApiError::decode(err.to_string()))
    }
}
