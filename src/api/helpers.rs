//! API 帮助函数

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::errors::AliasmapError;

use super::types::ApiResponse;

/// 构建 JSON 响应
pub fn json_response<T: Serialize>(
    status: StatusCode,
    message: impl Into<String>,
    data: Option<T>,
) -> HttpResponse {
    let code = if status.is_success() {
        0
    } else {
        status.as_u16() as i32
    };

    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(ApiResponse {
            code,
            message: message.into(),
            data,
        })
}

/// 构建成功响应
pub fn success_response<T: Serialize>(data: T) -> HttpResponse {
    json_response(StatusCode::OK, "OK", Some(data))
}

/// 构建错误响应
pub fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    json_response::<()>(status, message, None)
}

/// Map an error kind to the HTTP status the request handler renders.
pub fn status_for(err: &AliasmapError) -> StatusCode {
    match err {
        AliasmapError::AliasExists(_) => StatusCode::CONFLICT,
        AliasmapError::NotFound(_) => StatusCode::NOT_FOUND,
        AliasmapError::Validation(_) => StatusCode::BAD_REQUEST,
        AliasmapError::DatabaseConfig(_)
        | AliasmapError::DatabaseConnection(_)
        | AliasmapError::DatabaseOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// 从 AliasmapError 构建错误响应（自动映射 HTTP 状态码）
pub fn error_from_registry(err: &AliasmapError) -> HttpResponse {
    error_response(status_for(err), err.message())
}
