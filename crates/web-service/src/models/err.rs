use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use database::DatabaseError;
use serde_json::{Map, Value};
use shared_lib::ErrorReply;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为相应的http错误码
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的，所以需要转换为400
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 请求体不是合法的JSON
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// 路径参数无法解析，例如 `id` 不是数字
    #[error(transparent)]
    InvalidPath(#[from] PathRejection),

    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

/// 把校验错误整理为 `{字段: [错误信息...]}`
fn field_messages(errors: &ValidationErrors) -> Value {
    let fields: BTreeMap<String, Vec<Value>> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| Value::String(e.message.as_ref().map_or_else(|| e.code.to_string(), |m| m.to_string())))
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    Value::Object(fields.into_iter().map(|(k, v)| (k, Value::Array(v))).collect::<Map<_, _>>())
}

/// Tell axum how to convert `AppError` into a response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reply) = match self {
            AppError::ValidationFailed(err) => (
                StatusCode::BAD_REQUEST,
                ErrorReply {
                    error: field_messages(&err),
                },
            ),
            AppError::InvalidBody(err) => (StatusCode::BAD_REQUEST, ErrorReply::message(err.body_text())),
            AppError::InvalidPath(err) => (StatusCode::BAD_REQUEST, ErrorReply::message(err.body_text())),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorReply::message(msg)),
            AppError::RepositoryError(DatabaseError::InvalidArgument(msg)) => {
                (StatusCode::BAD_REQUEST, ErrorReply::message(msg))
            }
            AppError::RepositoryError(err) => {
                // 具体原因只记录在服务端日志中
                error!("❌ 数据库操作失败: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorReply::message("Something went wrong"))
            }
        };

        (status, Json(reply)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::projects::ProjectPayload;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn validation_errors_are_grouped_by_field() {
        let payload = ProjectPayload {
            name: String::new(),
            description: String::new(),
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(
            field_messages(&err),
            json!({
                "description": ["Description is required at least 1 character"],
                "name": ["Name is required at least 1 character"],
            })
        );
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let not_found = AppError::NotFound("Project 1 not found".into()).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let invalid = AppError::from(DatabaseError::invalid_argument("limit must be at least 1")).into_response();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let fault = AppError::from(DatabaseError::connection("refused")).into_response();
        assert_eq!(fault.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
