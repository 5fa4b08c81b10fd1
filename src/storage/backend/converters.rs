//! Conversions between the SeaORM entity model and the domain struct.

use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::UrlMapping;
use migration::entities::url_mapping;

pub fn model_to_mapping(model: url_mapping::Model) -> UrlMapping {
    UrlMapping {
        alias: model.alias,
        target_url: model.target_url,
        created_at: model.created_at,
    }
}

/// 构建插入用的 ActiveModel（id 由数据库分配）
pub fn mapping_to_active_model(mapping: &UrlMapping) -> url_mapping::ActiveModel {
    url_mapping::ActiveModel {
        id: NotSet,
        alias: Set(mapping.alias.clone()),
        target_url: Set(mapping.target_url.clone()),
        created_at: Set(mapping.created_at),
    }
}
