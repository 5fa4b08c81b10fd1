use std::fmt;

#[derive(Debug, Clone)]
pub enum AliasmapError {
    AliasExists(String),
    NotFound(String),
    Validation(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
}

impl AliasmapError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            AliasmapError::AliasExists(_) => "E001",
            AliasmapError::NotFound(_) => "E002",
            AliasmapError::Validation(_) => "E003",
            AliasmapError::DatabaseConfig(_) => "E004",
            AliasmapError::DatabaseConnection(_) => "E005",
            AliasmapError::DatabaseOperation(_) => "E006",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            AliasmapError::AliasExists(_) => "Alias Already Exists",
            AliasmapError::NotFound(_) => "Resource Not Found",
            AliasmapError::Validation(_) => "Validation Error",
            AliasmapError::DatabaseConfig(_) => "Database Configuration Error",
            AliasmapError::DatabaseConnection(_) => "Database Connection Error",
            AliasmapError::DatabaseOperation(_) => "Database Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            AliasmapError::AliasExists(msg) => msg,
            AliasmapError::NotFound(msg) => msg,
            AliasmapError::Validation(msg) => msg,
            AliasmapError::DatabaseConfig(msg) => msg,
            AliasmapError::DatabaseConnection(msg) => msg,
            AliasmapError::DatabaseOperation(msg) => msg,
        }
    }

    /// Whether this error belongs to the storage-failure class, as opposed to
    /// the caller-recoverable conflict/absence kinds.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            AliasmapError::DatabaseConfig(_)
                | AliasmapError::DatabaseConnection(_)
                | AliasmapError::DatabaseOperation(_)
        )
    }
}

impl fmt::Display for AliasmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for AliasmapError {}

// 便捷的构造函数
impl AliasmapError {
    pub fn alias_exists<T: Into<String>>(msg: T) -> Self {
        AliasmapError::AliasExists(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        AliasmapError::NotFound(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        AliasmapError::Validation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        AliasmapError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        AliasmapError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        AliasmapError::DatabaseOperation(msg.into())
    }
}

impl From<sea_orm::DbErr> for AliasmapError {
    fn from(err: sea_orm::DbErr) -> Self {
        AliasmapError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for AliasmapError {
    fn from(err: std::io::Error) -> Self {
        AliasmapError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AliasmapError>;
