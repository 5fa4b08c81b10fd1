use serde::{Deserialize, Serialize};

/// A single alias -> URL mapping.
///
/// The alias is the unique lookup key; the mapping is immutable once
/// saved and can only be replaced by delete + re-save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlMapping {
    pub alias: String,
    pub target_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
