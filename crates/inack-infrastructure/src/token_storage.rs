//! File-backed persistence for the authentication token.
//!
//! The original client kept the token in the platform key-value defaults
//! under a fixed key; here it is a small TOML document under the app config
//! directory. Writes are atomic (temp file + fsync + rename) so a crash never
//! leaves a torn file behind.

use inack_core::{InackError, Result, TokenStore};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::PathBuf;

use crate::paths::InackPaths;

/// On-disk shape of `auth.toml`.
#[derive(Serialize, Deserialize, Debug, Default)]
struct AuthRecord {
    token: Option<String>,
}

/// Storage for the single persisted authentication token.
///
/// Responsibilities:
/// - Load the token from `~/.config/inack/auth.toml` (absence means
///   unauthenticated)
/// - Save it atomically with 600 permissions on Unix
/// - Remove the file on clear
///
/// Does NOT:
/// - Validate the token against the server
/// - Handle encryption (plaintext TOML storage)
#[derive(Debug, Clone)]
pub struct TokenStorage {
    path: PathBuf,
}

impl TokenStorage {
    /// Creates a storage handle at the default path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            path: InackPaths::auth_file()?,
        })
    }

    /// Creates a storage handle at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load_sync(path: &PathBuf) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let record: AuthRecord = toml::from_str(&content)?;
        Ok(record.token)
    }

    fn save_sync(path: &PathBuf, token: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let record = AuthRecord {
            token: Some(token.to_string()),
        };
        let toml_string = toml::to_string_pretty(&record)?;

        // Write to a temp file in the same directory, then rename atomically.
        let tmp_path = Self::temp_path(path)?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp_file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }

        drop(tmp_file);
        fs::rename(&tmp_path, path)?;

        tracing::debug!(path = %path.display(), "persisted authentication token");
        Ok(())
    }

    fn clear_sync(path: &PathBuf) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
            tracing::debug!(path = %path.display(), "removed persisted authentication token");
        }
        Ok(())
    }

    fn temp_path(path: &PathBuf) -> Result<PathBuf> {
        let parent = path
            .parent()
            .ok_or_else(|| InackError::storage("Auth file path has no parent directory"))?;
        let file_name = path
            .file_name()
            .ok_or_else(|| InackError::storage("Auth file path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

#[async_trait::async_trait]
impl TokenStore for TokenStorage {
    async fn load(&self) -> Result<Option<String>> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::load_sync(&path))
            .await
            .map_err(|e| InackError::internal(format!("Failed to join storage task: {e}")))?
    }

    async fn save(&self, token: &str) -> Result<()> {
        let path = self.path.clone();
        let token = token.to_string();
        tokio::task::spawn_blocking(move || Self::save_sync(&path, &token))
            .await
            .map_err(|e| InackError::internal(format!("Failed to join storage task: {e}")))?
    }

    async fn clear(&self) -> Result<()> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || Self::clear_sync(&path))
            .await
            .map_err(|e| InackError::internal(format!("Failed to join storage task: {e}")))?
    }
}
