//! API 类型定义

use serde::{Deserialize, Serialize};

use crate::storage::UrlMapping;

/// Unified JSON envelope: `code` is 0 on success, the HTTP status code
/// otherwise.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PostNewMapping {
    pub alias: Option<String>,
    pub target_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MappingResponse {
    pub alias: String,
    pub target_url: String,
    pub created_at: String,
}

impl From<UrlMapping> for MappingResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            alias: mapping.alias,
            target_url: mapping.target_url,
            created_at: mapping.created_at.to_rfc3339(),
        }
    }
}
