//! Recipe and image-classification domain models.
//!
//! Field names follow the backend's JSON payloads verbatim (`image_path`,
//! `class_name`), so these types decode the wire format without a rename layer.

use serde::{Deserialize, Serialize};

/// A recipe as served by the backend.
///
/// The client never creates recipes locally; every instance comes from a
/// `/recipes` fetch and the locally held list is a cache the next successful
/// fetch replaces wholesale.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// Server-assigned, unique.
    pub id: i64,
    pub name: String,
    /// Free-text, comma-joined in practice.
    pub ingredients: String,
    /// URL of the recipe image, if the server has one. Absent or `null` on
    /// the wire decodes to `None`, never to an empty string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Owning user, included by the backend but unused by the client UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

/// Result of one `/analyze_image` call. Ephemeral, never persisted.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Classification {
    /// Predicted class of the photographed food.
    pub class_name: String,
    /// Model confidence in [0, 1].
    pub confidence: f64,
}
