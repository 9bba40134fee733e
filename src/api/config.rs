//! 配置查询端点

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::config::{AppConfig, RuntimeMode};
use crate::state::AppState;

/// 配置响应（隐藏 api_key 的实际值）
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// 是否已设置 API 密钥
    pub api_key_set: bool,
    /// 运行模式
    pub mode: RuntimeMode,
    /// API 基础 URL
    pub base_url: String,
    /// 模型名称
    pub model: String,
    /// 最大输出 token 数
    pub max_output_tokens: u32,
    /// 单字段长度上限
    pub max_field_length: Option<usize>,
}

impl From<&AppConfig> for ConfigResponse {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_key_set: config.api_key_set(),
            mode: config.mode,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            max_field_length: config.max_field_length,
        }
    }
}

/// 获取当前配置
async fn get_config_handler(State(state): State<Arc<AppState>>) -> Json<ConfigResponse> {
    Json(ConfigResponse::from(&state.config))
}

/// 创建配置路由
pub fn config_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/config", get(get_config_handler))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_response_hides_key() {
        let config = AppConfig {
            api_key: Some("AIzaSecretValue".to_string()),
            ..AppConfig::default()
        };
        let json = serde_json::to_value(ConfigResponse::from(&config)).unwrap();
        assert_eq!(json["api_key_set"], true);
        assert_eq!(json["mode"], "production");
        assert_eq!(json["max_output_tokens"], 1000);
        assert!(!json.to_string().contains("AIzaSecretValue"));
    }
}
