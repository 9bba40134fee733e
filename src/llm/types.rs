//! LLM 类型定义

use async_trait::async_trait;

/// 文本生成能力
///
/// 中继服务只依赖这一个调用，测试中可以替换为确定性的桩实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 用给定提示词生成文本，输出长度不超过 `max_output_tokens`
    async fn generate(&self, prompt: &str, max_output_tokens: u32) -> Result<String, LlmError>;
}

/// LLM 错误类型
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// HTTP 请求错误
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// 配置错误
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON 解析错误
    #[error("Failed to parse response JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// 响应中没有任何候选结果
    #[error("Response contained no candidates")]
    EmptyResponse,
}

impl LlmError {
    /// 错误类别名，用于日志
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::HttpError(_) => "HttpError",
            LlmError::ApiError { .. } => "ApiError",
            LlmError::ConfigError(_) => "ConfigError",
            LlmError::JsonError(_) => "JsonError",
            LlmError::EmptyResponse => "EmptyResponse",
        }
    }
}
