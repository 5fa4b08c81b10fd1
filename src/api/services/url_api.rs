//! JSON API for mapping management
//!
//! Create, look up and delete alias -> URL mappings. There is no update
//! route: changing a target means delete + re-create.

use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::errors::AliasmapError;
use crate::services::{RegistryService, SaveRequest};
use crate::utils::url_validator::validate_url;

use crate::api::helpers::{error_from_registry, error_response, json_response, success_response};
use crate::api::types::{MappingResponse, PostNewMapping};

/// 创建新映射
pub async fn post_mapping(
    body: web::Json<PostNewMapping>,
    registry: web::Data<Arc<RegistryService>>,
) -> impl Responder {
    let body = body.into_inner();

    // Target validation belongs to this layer; the registry stores any
    // non-empty string it is handed.
    if let Err(e) = validate_url(&body.target_url) {
        warn!("API: invalid target URL rejected - {}", e);
        return error_response(StatusCode::BAD_REQUEST, &e.to_string());
    }

    let req = SaveRequest {
        alias: body.alias,
        target_url: body.target_url,
    };

    match registry.save(req).await {
        Ok(result) => {
            info!(
                "API: mapping {} - {} -> {}",
                if result.generated_alias {
                    "created (generated alias)"
                } else {
                    "created"
                },
                result.mapping.alias,
                result.mapping.target_url
            );
            json_response(
                StatusCode::CREATED,
                "Created",
                Some(MappingResponse::from(result.mapping)),
            )
        }
        Err(e) => {
            match &e {
                AliasmapError::AliasExists(_) => warn!("API: alias conflict - {}", e.message()),
                _ => error!("API: failed to create mapping - {}", e),
            }
            error_from_registry(&e)
        }
    }
}

/// 获取单个映射
pub async fn get_mapping(
    alias: web::Path<String>,
    registry: web::Data<Arc<RegistryService>>,
) -> impl Responder {
    match registry.resolve(&alias).await {
        Ok(mapping) => success_response(MappingResponse::from(mapping)),
        Err(e) => {
            if matches!(e, AliasmapError::NotFound(_)) {
                info!("API: mapping not found - {}", alias);
            } else {
                error!("API: failed to look up mapping - {}: {}", alias, e);
            }
            error_from_registry(&e)
        }
    }
}

/// 删除映射（幂等）
pub async fn delete_mapping(
    alias: web::Path<String>,
    registry: web::Data<Arc<RegistryService>>,
) -> impl Responder {
    match registry.delete(&alias).await {
        Ok(()) => {
            info!("API: mapping deleted - {}", alias);
            success_response(serde_json::json!({
                "message": "Mapping deleted"
            }))
        }
        Err(e) => {
            error!("API: failed to delete mapping - {}: {}", alias, e);
            error_from_registry(&e)
        }
    }
}

/// URL 管理路由 `/api/url`
///
/// 包含：
/// - POST /api/url - 创建映射
/// - GET/HEAD /api/url/{alias} - 获取单个映射
/// - DELETE /api/url/{alias} - 删除映射
pub fn url_api_routes() -> actix_web::Scope {
    web::scope("/api/url")
        .route("", web::post().to(post_mapping))
        .route("/{alias}", web::get().to(get_mapping))
        .route("/{alias}", web::head().to(get_mapping))
        .route("/{alias}", web::delete().to(delete_mapping))
}
