//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::errors::{AliasmapError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};

/// 从数据库 URL 推断数据库类型
///
/// 带协议前缀的 URL 按协议判断；裸路径按扩展名当作 SQLite 文件。
/// 返回的是 URL 中出现的原始名称，规范化交给 `normalize_backend_name`。
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if let Some((scheme, _)) = database_url.split_once("://") {
        return match scheme {
            "sqlite" | "mysql" | "mariadb" | "postgres" | "postgresql" => Ok(scheme.to_string()),
            _ => Err(AliasmapError::database_config(format!(
                "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
                database_url
            ))),
        };
    }

    if database_url.ends_with(".db") || database_url.ends_with(".sqlite") || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else {
        Err(AliasmapError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 规范化 backend 名称（别名协议归一到驱动名称）
pub fn normalize_backend_name(backend: &str) -> String {
    match backend {
        "mariadb" => "mysql".to_string(),
        "postgresql" => "postgres".to_string(),
        other => other.to_string(),
    }
}

/// SeaORM-based storage backend
///
/// Holds the shared connection pool; safe to clone and share across
/// concurrent request handlers. All mapping state lives in the database.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = &config.database_url;
        if database_url.is_empty() {
            return Err(AliasmapError::database_config(
                "database_url 未设置".to_string(),
            ));
        }

        let backend_name = normalize_backend_name(&infer_backend_from_url(database_url)?);

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, &backend_name, config).await?
        };

        let storage = SeaOrmStorage { db, backend_name };

        // 运行迁移
        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    pub async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| AliasmapError::database_connection(format!("Database ping failed: {}", e)))
    }
}
