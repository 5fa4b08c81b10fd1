//! RegistryService tests
//!
//! Tests for the registry business logic: save (caller-chosen and
//! generated aliases), resolve, and idempotent delete.

use std::sync::Arc;

use chrono::Utc;
use tempfile::TempDir;

use aliasmap::config::DatabaseConfig;
use aliasmap::errors::AliasmapError;
use aliasmap::services::{RegistryService, SaveRequest};
use aliasmap::storage::{SeaOrmStorage, UrlMapping};

// =============================================================================
// Test Setup
// =============================================================================

/// Create a service backed by a temporary SQLite database.
///
/// The storage handle is returned alongside the service so tests can seed
/// state behind the service's back.
async fn create_test_service(alias_length: usize) -> (RegistryService, Arc<SeaOrmStorage>, TempDir)
{
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test_service.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&DatabaseConfig {
            database_url: db_url,
            ..Default::default()
        })
        .await
        .expect("Failed to create storage"),
    );

    let service = RegistryService::new(storage.clone(), alias_length);
    (service, storage, temp_dir)
}

fn save_request(alias: Option<&str>, target_url: &str) -> SaveRequest {
    SaveRequest {
        alias: alias.map(|s| s.to_string()),
        target_url: target_url.to_string(),
    }
}

// =============================================================================
// Save Tests
// =============================================================================

mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_save_with_alias_then_resolve() {
        let (service, _storage, _temp) = create_test_service(6).await;

        let result = service
            .save(save_request(Some("docs"), "https://docs.example.com"))
            .await
            .expect("save failed");
        assert_eq!(result.mapping.alias, "docs");
        assert!(!result.generated_alias);

        let mapping = service.resolve("docs").await.expect("resolve failed");
        assert_eq!(mapping.target_url, "https://docs.example.com");
    }

    #[tokio::test]
    async fn test_save_duplicate_alias_conflicts() {
        let (service, _storage, _temp) = create_test_service(6).await;

        service
            .save(save_request(Some("taken"), "https://first.example.com"))
            .await
            .unwrap();

        let err = service
            .save(save_request(Some("taken"), "https://second.example.com"))
            .await
            .expect_err("duplicate save should fail");
        assert!(matches!(err, AliasmapError::AliasExists(_)));

        // The first mapping survives untouched
        let mapping = service.resolve("taken").await.unwrap();
        assert_eq!(mapping.target_url, "https://first.example.com");
    }

    #[tokio::test]
    async fn test_save_empty_target_rejected() {
        let (service, _storage, _temp) = create_test_service(6).await;

        let err = service
            .save(save_request(Some("empty"), ""))
            .await
            .expect_err("empty target must be rejected");
        assert!(matches!(err, AliasmapError::Validation(_)));
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_omitted() {
        let (service, _storage, _temp) = create_test_service(6).await;

        let result = service
            .save(save_request(None, "https://example.com"))
            .await
            .expect("save failed");
        assert!(result.generated_alias);
        assert_eq!(result.mapping.alias.len(), 6);
        assert!(
            result
                .mapping
                .alias
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );

        let mapping = service.resolve(&result.mapping.alias).await.unwrap();
        assert_eq!(mapping.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_save_empty_alias_treated_as_omitted() {
        let (service, _storage, _temp) = create_test_service(8).await;

        let result = service
            .save(save_request(Some(""), "https://example.com"))
            .await
            .expect("save failed");
        assert!(result.generated_alias);
        assert_eq!(result.mapping.alias.len(), 8);
    }

    #[tokio::test]
    async fn test_generation_gives_up_when_alias_space_exhausted() {
        // Length-1 aliases give a 62-slot space; fill it completely so every
        // generated candidate collides.
        let (service, storage, _temp) = create_test_service(1).await;

        let chars = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
        for c in chars.chars() {
            storage
                .insert(UrlMapping {
                    alias: c.to_string(),
                    target_url: "https://filler.example.com".to_string(),
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let err = service
            .save(save_request(None, "https://example.com"))
            .await
            .expect_err("exhausted alias space must fail");
        assert!(err.is_storage_failure());
    }
}

// =============================================================================
// Resolve Tests
// =============================================================================

mod resolve_tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_missing_is_not_found() {
        let (service, _storage, _temp) = create_test_service(6).await;

        let err = service
            .resolve("never-saved")
            .await
            .expect_err("missing alias must not resolve");
        assert!(matches!(err, AliasmapError::NotFound(_)));
        assert!(!err.is_storage_failure());
    }

    #[tokio::test]
    async fn test_resolve_empty_alias_rejected() {
        let (service, _storage, _temp) = create_test_service(6).await;

        let err = service.resolve("").await.expect_err("empty alias");
        assert!(matches!(err, AliasmapError::Validation(_)));
    }
}

// =============================================================================
// Delete Tests
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_missing_is_noop_success() {
        let (service, _storage, _temp) = create_test_service(6).await;

        service
            .delete("never-existed")
            .await
            .expect("idempotent delete must succeed");
    }

    #[tokio::test]
    async fn test_delete_frees_alias_for_reuse() {
        let (service, _storage, _temp) = create_test_service(6).await;

        service
            .save(save_request(Some("reuse"), "https://old.example.com"))
            .await
            .unwrap();
        service.delete("reuse").await.unwrap();

        let err = service.resolve("reuse").await.unwrap_err();
        assert!(matches!(err, AliasmapError::NotFound(_)));

        service
            .save(save_request(Some("reuse"), "https://new.example.com"))
            .await
            .expect("alias must be reusable after delete");
        let mapping = service.resolve("reuse").await.unwrap();
        assert_eq!(mapping.target_url, "https://new.example.com");
    }
}

// =============================================================================
// End-to-end lifecycle
// =============================================================================

#[tokio::test]
async fn test_save_conflict_delete_resolve_cycle() {
    let (service, _storage, _temp) = create_test_service(6).await;

    service
        .save(save_request(Some("go-lang"), "https://go.dev"))
        .await
        .expect("save failed");

    let mapping = service.resolve("go-lang").await.unwrap();
    assert_eq!(mapping.target_url, "https://go.dev");

    let err = service
        .save(save_request(Some("go-lang"), "https://golang.org"))
        .await
        .unwrap_err();
    assert!(matches!(err, AliasmapError::AliasExists(_)));

    service.delete("go-lang").await.expect("delete failed");

    let err = service.resolve("go-lang").await.unwrap_err();
    assert!(matches!(err, AliasmapError::NotFound(_)));
}
