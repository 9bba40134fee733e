//! 应用配置管理
//!
//! 启动时从配置文件和环境变量加载一次，之后以不可变值注入到路由状态中。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::error::AppError;

/// 模型服务凭据的环境变量名
pub const API_KEY_ENV: &str = "GOOGLE_GENERATIVE_AI_API_KEY";

/// 运行模式的环境变量名
const MODE_ENV: &str = "APP_ENV";

/// 监听地址的环境变量名
const LISTEN_ADDR_ENV: &str = "LISTEN_ADDR";

/// 配置文件路径的环境变量名
const CONFIG_PATH_ENV: &str = "CONTENT_GENERATOR_CONFIG";

/// 运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeMode {
    Development,
    #[default]
    Production,
}

impl RuntimeMode {
    /// 未设置时按生产模式处理
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()) {
            None => RuntimeMode::Production,
            Some(v) if v == "production" || v == "prod" => RuntimeMode::Production,
            Some(_) => RuntimeMode::Development,
        }
    }

    /// 是否允许在错误响应中暴露原始错误信息
    pub fn exposes_error_details(self) -> bool {
        self != RuntimeMode::Production
    }
}

/// 获取配置文件路径
fn get_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    // 配置文件位于可执行文件同级目录
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("config.json")
}

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API 密钥，只从环境变量读取
    #[serde(skip)]
    pub api_key: Option<String>,

    /// 运行模式，只从环境变量读取
    #[serde(skip)]
    pub mode: RuntimeMode,

    /// Gemini API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,

    /// 最大输出 token 数
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    /// 监听地址
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// 单个字段的最大字符数，未设置时不限制
    #[serde(default)]
    pub max_field_length: Option<usize>,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    1000
}

fn default_listen_addr() -> String {
    "127.0.0.1:8765".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            mode: RuntimeMode::default(),
            base_url: default_base_url(),
            model: default_model(),
            max_output_tokens: default_max_output_tokens(),
            listen_addr: default_listen_addr(),
            max_field_length: None,
        }
    }
}

impl AppConfig {
    /// 从配置文件和进程环境加载配置
    pub fn load() -> Result<Self, AppError> {
        let mut config = Self::load_from_file()?.unwrap_or_default();
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// 从文件加载配置，文件不存在时返回 None
    fn load_from_file() -> Result<Option<Self>, AppError> {
        let path = get_config_path();
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content).map(Some)
    }

    /// 解析 JSON 配置内容
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content)
            .map_err(|e| AppError::Config(format!("invalid config file: {}", e)))
    }

    /// 应用环境变量覆盖
    ///
    /// `lookup` 按变量名返回值，测试中可替换为固定映射
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_key = lookup(API_KEY_ENV).filter(|key| !key.trim().is_empty());
        self.mode = RuntimeMode::from_env_value(lookup(MODE_ENV).as_deref());
        if let Some(addr) = lookup(LISTEN_ADDR_ENV).filter(|a| !a.trim().is_empty()) {
            self.listen_addr = addr;
        }
    }

    /// 是否已配置 API 密钥
    pub fn api_key_set(&self) -> bool {
        self.api_key.is_some()
    }
}
