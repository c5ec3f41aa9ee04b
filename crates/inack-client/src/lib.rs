//! HTTP layer: the reqwest-backed implementation of
//! [`inack_core::RecipeApi`] plus the multipart body encoder.

pub mod client;
pub mod multipart;

pub use client::ApiClient;
