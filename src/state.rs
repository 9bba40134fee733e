//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。启动后全部只读。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::llm::TextGenerator;
use crate::services::GenerationService;
use crate::ui::PageRenderer;

/// 应用共享状态
pub struct AppState {
    /// 启动时加载的配置
    pub config: AppConfig,
    /// 内容生成中继服务
    pub generation: GenerationService,
    /// 页面渲染器
    pub pages: PageRenderer,
}

impl AppState {
    /// 使用指定的生成器创建状态
    pub fn with_generator(
        config: AppConfig,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Result<Self, AppError> {
        let generation = GenerationService::new(&config, generator);
        Ok(Self {
            config,
            generation,
            pages: PageRenderer::new()?,
        })
    }

    /// 根据配置创建状态，已配置密钥时连接 Gemini
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let generator = GenerationService::generator_from_config(&config)
            .map_err(|e| AppError::Config(format!("failed to create Gemini client: {}", e)))?;
        Self::with_generator(config, generator)
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: AppConfig) -> Result<Arc<AppState>, AppError> {
    Ok(Arc::new(AppState::from_config(config)?))
}
