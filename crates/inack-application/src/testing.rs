//! Shared test doubles for the use-case tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use std::sync::Arc;

use inack_core::{ApiError, Classification, Credentials, Recipe, RecipeApi};
use inack_infrastructure::TokenStorage;
use tempfile::TempDir;

/// A real token storage backed by a temp directory. The directory guard must
/// outlive the storage.
pub(crate) fn temp_store() -> (TempDir, Arc<TokenStorage>) {
    let dir = TempDir::new().unwrap();
    let storage = Arc::new(TokenStorage::with_path(dir.path().join("auth.toml")));
    (dir, storage)
}

pub(crate) fn recipe(id: i64, name: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        ingredients: "tomato, basil".to_string(),
        image_path: None,
        user_id: None,
    }
}

/// Scriptable in-memory [`RecipeApi`].
///
/// Fetch responses are consumed from a queue so tests can script successive
/// polls; the other operations answer with a single configured result.
pub(crate) struct FakeApi {
    pub login_response: Mutex<Result<String, ApiError>>,
    pub register_response: Mutex<Result<(), ApiError>>,
    pub fetch_queue: Mutex<VecDeque<Result<Vec<Recipe>, ApiError>>>,
    pub fetch_fallback: Mutex<Result<Vec<Recipe>, ApiError>>,
    pub delete_response: Mutex<Result<(), ApiError>>,
    pub analyze_response: Mutex<Result<Classification, ApiError>>,
    pub fetch_count: AtomicUsize,
    pub deleted_ids: Mutex<Vec<i64>>,
    pub last_login: Mutex<Option<Credentials>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            login_response: Mutex::new(Ok("token-1".to_string())),
            register_response: Mutex::new(Ok(())),
            fetch_queue: Mutex::new(VecDeque::new()),
            fetch_fallback: Mutex::new(Ok(Vec::new())),
            delete_response: Mutex::new(Ok(())),
            analyze_response: Mutex::new(Ok(Classification {
                class_name: "pizza".to_string(),
                confidence: 0.9,
            })),
            fetch_count: AtomicUsize::new(0),
            deleted_ids: Mutex::new(Vec::new()),
            last_login: Mutex::new(None),
        }
    }

    pub fn set_login(&self, response: Result<String, ApiError>) {
        *self.login_response.lock().unwrap() = response;
    }

    pub fn set_register(&self, response: Result<(), ApiError>) {
        *self.register_response.lock().unwrap() = response;
    }

    pub fn set_fetch(&self, response: Result<Vec<Recipe>, ApiError>) {
        *self.fetch_fallback.lock().unwrap() = response;
    }

    pub fn push_fetch(&self, response: Result<Vec<Recipe>, ApiError>) {
        self.fetch_queue.lock().unwrap().push_back(response);
    }

    pub fn set_delete(&self, response: Result<(), ApiError>) {
        *self.delete_response.lock().unwrap() = response;
    }

    pub fn set_analyze(&self, response: Result<Classification, ApiError>) {
        *self.analyze_response.lock().unwrap() = response;
    }

    pub fn fetches(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl RecipeApi for FakeApi {
    async fn login(&self, credentials: &Credentials) -> Result<String, ApiError> {
        *self.last_login.lock().unwrap() = Some(credentials.clone());
        self.login_response.lock().unwrap().clone()
    }

    async fn register(&self, _credentials: &Credentials) -> Result<(), ApiError> {
        self.register_response.lock().unwrap().clone()
    }

    async fn fetch_recipes(&self, _token: &str) -> Result<Vec<Recipe>, ApiError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if let Some(scripted) = self.fetch_queue.lock().unwrap().pop_front() {
            return scripted;
        }
        self.fetch_fallback.lock().unwrap().clone()
    }

    async fn delete_recipe(&self, _token: &str, id: i64) -> Result<(), ApiError> {
        let response = self.delete_response.lock().unwrap().clone();
        if response.is_ok() {
            self.deleted_ids.lock().unwrap().push(id);
        }
        response
    }

    async fn analyze_image(&self, _token: &str, _jpeg: &[u8]) -> Result<Classification, ApiError> {
        self.analyze_response.lock().unwrap().clone()
    }
}
