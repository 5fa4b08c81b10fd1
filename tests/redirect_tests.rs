//! Redirect service tests
//!
//! Tests for the core redirect path: alias -> 307 redirect.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use tempfile::TempDir;

use aliasmap::api::services::redirect_routes;
use aliasmap::config::DatabaseConfig;
use aliasmap::services::{RegistryService, SaveRequest};
use aliasmap::storage::SeaOrmStorage;

async fn create_test_registry() -> (Arc<RegistryService>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("redirect_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&DatabaseConfig {
            database_url: db_url,
            ..Default::default()
        })
        .await
        .expect("Failed to create storage"),
    );

    (Arc::new(RegistryService::new(storage, 6)), temp_dir)
}

#[actix_web::test]
async fn test_redirect_known_alias_returns_307() {
    let (registry, _temp) = create_test_registry().await;
    registry
        .save(SaveRequest {
            alias: Some("rust".to_string()),
            target_url: "https://www.rust-lang.org/".to_string(),
        })
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .service(redirect_routes()),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/rust").to_request()).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get("Location")
        .expect("Location header missing")
        .to_str()
        .unwrap();
    assert_eq!(location, "https://www.rust-lang.org/");
}

#[actix_web::test]
async fn test_redirect_unknown_alias_returns_404() {
    let (registry, _temp) = create_test_registry().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .service(redirect_routes()),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/missing").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_redirect_invalid_alias_returns_404() {
    let (registry, _temp) = create_test_registry().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .service(redirect_routes()),
    )
    .await;

    // '!' is outside the alias charset; rejected before any storage lookup
    let resp = test::call_service(&app, TestRequest::get().uri("/oops!").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_redirect_after_delete_returns_404() {
    let (registry, _temp) = create_test_registry().await;
    registry
        .save(SaveRequest {
            alias: Some("brief".to_string()),
            target_url: "https://example.com/".to_string(),
        })
        .await
        .unwrap();
    registry.delete("brief").await.unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .service(redirect_routes()),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/brief").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
