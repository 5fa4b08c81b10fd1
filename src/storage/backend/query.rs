//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use super::SeaOrmStorage;
use super::converters::model_to_mapping;
use crate::errors::{AliasmapError, Result};
use crate::storage::UrlMapping;

use migration::entities::url_mapping;

impl SeaOrmStorage {
    /// Look up a mapping by exact alias.
    ///
    /// `Ok(None)` means the alias has no mapping; database faults are
    /// propagated as errors, never collapsed into "not found".
    pub async fn get(&self, alias: &str) -> Result<Option<UrlMapping>> {
        let model = url_mapping::Entity::find()
            .filter(url_mapping::Column::Alias.eq(alias))
            .one(&self.db)
            .await
            .map_err(|e| {
                AliasmapError::database_operation(format!("查询映射 '{}' 失败: {}", alias, e))
            })?;

        Ok(model.map(model_to_mapping))
    }

    /// 映射总数（健康检查使用）
    pub async fn count(&self) -> Result<u64> {
        url_mapping::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| AliasmapError::database_operation(format!("统计映射数量失败: {}", e)))
    }
}
