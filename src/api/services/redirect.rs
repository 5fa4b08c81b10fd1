use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{debug, error, trace};

use crate::errors::AliasmapError;
use crate::services::RegistryService;
use crate::utils::is_valid_alias;

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_redirect(
        path: web::Path<String>,
        registry: web::Data<Arc<RegistryService>>,
    ) -> impl Responder {
        let alias = path.into_inner();

        if !is_valid_alias(&alias) {
            // 非法别名，直接 404，不查询存储
            trace!("Invalid alias rejected: {}", &alias);
            return Self::not_found_response();
        }

        match registry.resolve(&alias).await {
            Ok(mapping) => {
                debug!("Redirecting {} -> {}", alias, mapping.target_url);
                HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
                    .insert_header(("Location", mapping.target_url))
                    .finish()
            }
            Err(AliasmapError::NotFound(_)) => {
                debug!("Redirect alias not found: {}", &alias);
                Self::not_found_response()
            }
            Err(e) => {
                error!("Database error during redirect lookup: {}", e);
                Self::error_response()
            }
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body("Internal Server Error")
    }
}

/// Redirect 路由配置
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{alias}", web::get().to(RedirectService::handle_redirect))
        .route("/{alias}", web::head().to(RedirectService::handle_redirect))
}
