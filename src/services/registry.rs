//! URL registry service
//!
//! Provides the business logic for alias -> URL mappings: save (with
//! optional alias generation), resolve, and delete. Shared between the
//! JSON API handlers and the redirect handler.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::errors::{AliasmapError, Result};
use crate::storage::{SeaOrmStorage, UrlMapping};
use crate::utils::generate_random_alias;

/// Upper bound on regeneration attempts when a generated alias collides.
/// Collisions at the configured length are astronomically unlikely; the
/// bound only absorbs flukes, it is not the uniqueness mechanism.
const MAX_GENERATE_ATTEMPTS: usize = 5;

/// Request to save a new mapping
#[derive(Debug, Clone)]
pub struct SaveRequest {
    /// Alias (optional, will be generated if not provided)
    pub alias: Option<String>,
    /// Target URL
    pub target_url: String,
}

/// Result of a save operation
#[derive(Debug, Clone)]
pub struct SaveResult {
    /// The stored mapping
    pub mapping: UrlMapping,
    /// Whether the alias was auto-generated
    pub generated_alias: bool,
}

/// Service owning the mapping set and its invariants.
///
/// The service itself is stateless; all state lives in the storage
/// backend, so a single instance can be shared across concurrent
/// request handlers. Both the storage handle and the generated-alias
/// length are supplied at construction, never read from ambient state.
pub struct RegistryService {
    storage: Arc<SeaOrmStorage>,
    alias_length: usize,
}

impl RegistryService {
    pub fn new(storage: Arc<SeaOrmStorage>, alias_length: usize) -> Self {
        Self {
            storage,
            alias_length: alias_length.max(1),
        }
    }

    /// Save a new mapping.
    ///
    /// With a caller-chosen alias the insert is attempted exactly once and
    /// a conflict surfaces as `AliasExists`. Without one, a random alias is
    /// generated and the insert retried on collision, up to
    /// `MAX_GENERATE_ATTEMPTS` times.
    pub async fn save(&self, req: SaveRequest) -> Result<SaveResult> {
        if req.target_url.is_empty() {
            return Err(AliasmapError::validation("target_url must not be empty"));
        }

        match req.alias.filter(|a| !a.is_empty()) {
            Some(alias) => {
                let mapping = UrlMapping {
                    alias,
                    target_url: req.target_url,
                    created_at: Utc::now(),
                };
                self.storage.insert(mapping.clone()).await?;
                Ok(SaveResult {
                    mapping,
                    generated_alias: false,
                })
            }
            None => self.save_generated(req.target_url).await,
        }
    }

    async fn save_generated(&self, target_url: String) -> Result<SaveResult> {
        for attempt in 1..=MAX_GENERATE_ATTEMPTS {
            let mapping = UrlMapping {
                alias: generate_random_alias(self.alias_length),
                target_url: target_url.clone(),
                created_at: Utc::now(),
            };

            match self.storage.insert(mapping.clone()).await {
                Ok(()) => {
                    return Ok(SaveResult {
                        mapping,
                        generated_alias: true,
                    });
                }
                Err(AliasmapError::AliasExists(_)) => {
                    warn!(
                        "Generated alias collided (attempt {}/{}), retrying",
                        attempt, MAX_GENERATE_ATTEMPTS
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AliasmapError::database_operation(format!(
            "Failed to generate a free alias after {} attempts",
            MAX_GENERATE_ATTEMPTS
        )))
    }

    /// Resolve an alias to its mapping.
    pub async fn resolve(&self, alias: &str) -> Result<UrlMapping> {
        if alias.is_empty() {
            return Err(AliasmapError::validation("alias must not be empty"));
        }

        self.storage
            .get(alias)
            .await?
            .ok_or_else(|| AliasmapError::not_found(format!("No mapping for alias '{}'", alias)))
    }

    /// Delete the mapping for an alias.
    ///
    /// Deleting an absent alias is a no-op success; the alias becomes free
    /// for reuse by a later save either way.
    pub async fn delete(&self, alias: &str) -> Result<()> {
        if alias.is_empty() {
            return Err(AliasmapError::validation("alias must not be empty"));
        }

        self.storage.remove(alias).await?;
        info!("RegistryService: deleted '{}'", alias);
        Ok(())
    }
}
