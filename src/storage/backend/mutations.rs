//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, SqlErr};
use tracing::{debug, info};

use super::SeaOrmStorage;
use super::converters::mapping_to_active_model;
use crate::errors::{AliasmapError, Result};
use crate::storage::UrlMapping;

use migration::entities::url_mapping;

impl SeaOrmStorage {
    /// Insert a new mapping.
    ///
    /// The uniqueness check is the database's unique index on `alias`: the
    /// insert is a single atomic statement, and a constraint violation is
    /// reported as `AliasExists`. Existing rows are never overwritten.
    pub async fn insert(&self, mapping: UrlMapping) -> Result<()> {
        let active_model = mapping_to_active_model(&mapping);

        match url_mapping::Entity::insert(active_model).exec(&self.db).await {
            Ok(_) => {
                info!("URL mapping saved: {} -> {}", mapping.alias, mapping.target_url);
                Ok(())
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(AliasmapError::alias_exists(
                    format!("别名已存在: {}", mapping.alias),
                )),
                _ => Err(AliasmapError::database_operation(format!(
                    "插入映射 '{}' 失败: {}",
                    mapping.alias, e
                ))),
            },
        }
    }

    /// Remove the mapping for `alias` if present.
    ///
    /// Removing an absent alias is a no-op success: the end state (no
    /// mapping) already holds.
    pub async fn remove(&self, alias: &str) -> Result<()> {
        let result = url_mapping::Entity::delete_many()
            .filter(url_mapping::Column::Alias.eq(alias))
            .exec(&self.db)
            .await
            .map_err(|e| {
                AliasmapError::database_operation(format!("删除映射 '{}' 失败: {}", alias, e))
            })?;

        if result.rows_affected == 0 {
            debug!("URL mapping already absent: {}", alias);
        } else {
            info!("URL mapping deleted: {}", alias);
        }
        Ok(())
    }
}
