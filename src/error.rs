//! 统一错误处理模块
//!
//! 定义应用级错误类型，并实现 axum 的 IntoResponse trait 以便自动转换为 HTTP 响应。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// 缺少凭据时返回给调用方的固定消息
pub const MISSING_CREDENTIAL_MESSAGE: &str =
    "Missing GOOGLE_GENERATIVE_AI_API_KEY environment variable.";

/// 字段缺失时返回给调用方的固定消息
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required";

/// 生成失败时返回给调用方的通用消息
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate content. Please try again.";

/// 应用错误枚举
#[derive(Error, Debug)]
pub enum AppError {
    /// 未配置模型服务凭据
    #[error("{}", MISSING_CREDENTIAL_MESSAGE)]
    MissingCredential,

    /// 请求缺少必填字段
    #[error("{}", MISSING_FIELDS_MESSAGE)]
    MissingFields,

    /// 字段超过配置的长度上限
    #[error("{field} exceeds the maximum length of {limit} characters")]
    FieldTooLong { field: &'static str, limit: usize },

    /// 生成失败（请求体解析、网络、服务端错误等）
    ///
    /// `details` 只在非生产模式下携带原始错误信息
    #[error("{}", GENERATION_FAILED_MESSAGE)]
    Generation { details: Option<String> },

    /// 启动阶段的配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 页面模板渲染错误
    #[error("Failed to render page: {0}")]
    Render(String),
}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::FieldTooLong { .. } => StatusCode::BAD_REQUEST,
            AppError::MissingCredential
            | AppError::Generation { .. }
            | AppError::Config(_)
            | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
            details: match self {
                AppError::Generation { details } => details,
                _ => None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// 便捷类型别名
pub type AppResult<T> = Result<T, AppError>;
