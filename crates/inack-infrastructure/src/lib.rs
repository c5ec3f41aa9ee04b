//! Infrastructure layer: local paths and token persistence.

pub mod paths;
pub mod token_storage;

pub use paths::InackPaths;
pub use token_storage::TokenStorage;
