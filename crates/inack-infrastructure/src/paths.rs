//! Unified path management for inack client files.
//!
//! All locally persisted client state lives under the platform config
//! directory in an `inack/` subdirectory, consistent across Linux, macOS and
//! Windows.

use inack_core::{InackError, Result};
use std::path::PathBuf;

/// Unified path management for the inack client.
///
/// # Directory structure
///
/// ```text
/// ~/.config/inack/             # Config directory (XDG on Linux)
/// └── auth.toml                # Persisted authentication token
/// ```
pub struct InackPaths;

impl InackPaths {
    /// Returns the inack configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/inack/`
    /// - `Err(InackError::Config)`: the platform config directory could not
    ///   be determined
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("inack"))
            .ok_or_else(|| InackError::config("Cannot find platform config directory"))
    }

    /// Returns the path to the persisted authentication token file.
    ///
    /// # Security Note
    ///
    /// The file is written with 600 permissions on Unix; absence of the file
    /// means unauthenticated.
    pub fn auth_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("auth.toml"))
    }
}
