//! 内容生成中继服务
//!
//! 校验请求、构建提示词、调用一次模型并把结果或错误交给 HTTP 层。
//! 不重试，不缓存，不保存任何请求。

use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::llm::{mask_api_key, GeminiClient, LlmError, TextGenerator};
use crate::models::{FormField, GenerationRequest};
use crate::services::PromptService;

/// 内容生成服务
pub struct GenerationService {
    /// 未配置凭据时为 None
    generator: Option<Arc<dyn TextGenerator>>,
    prompt_service: PromptService,
    model: String,
    max_output_tokens: u32,
    max_field_length: Option<usize>,
    expose_details: bool,
}

impl GenerationService {
    /// 用给定的生成器创建服务
    pub fn new(config: &AppConfig, generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            generator,
            prompt_service: PromptService::new(),
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            max_field_length: config.max_field_length,
            expose_details: config.mode.exposes_error_details(),
        }
    }

    /// 根据配置创建生成器，已配置密钥时使用 Gemini 客户端
    pub fn generator_from_config(
        config: &AppConfig,
    ) -> Result<Option<Arc<dyn TextGenerator>>, LlmError> {
        let generator: Option<Arc<dyn TextGenerator>> = match config.api_key.as_deref() {
            Some(api_key) => {
                let client = GeminiClient::new(api_key, &config.base_url, &config.model)?;
                info!(
                    "Gemini client ready: endpoint={}, api_key={}",
                    client.endpoint(),
                    mask_api_key(api_key)
                );
                Some(Arc::new(client))
            }
            None => {
                warn!(
                    "{} is not set; generation requests will fail until it is configured",
                    crate::config::API_KEY_ENV
                );
                None
            }
        };

        Ok(generator)
    }

    /// 是否已配置模型凭据
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// 处理原始 JSON 请求体
    ///
    /// 凭据检查先于请求体解析
    pub async fn generate_from_body(&self, body: &[u8]) -> AppResult<String> {
        if self.generator.is_none() {
            return Err(AppError::MissingCredential);
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| self.generation_failure("InvalidBody", &e))?;
        let request = GenerationRequest::from_json_value(&value).ok_or(AppError::MissingFields)?;

        self.generate(&request).await
    }

    /// 为已解析的请求生成内容
    pub async fn generate(&self, request: &GenerationRequest) -> AppResult<String> {
        let generator = self.generator.as_ref().ok_or(AppError::MissingCredential)?;
        self.validate(request)?;

        let prompt = self.prompt_service.build_generation_prompt(request);
        info!(
            "Generating content: model={}, prompt_len={}, max_output_tokens={}",
            self.model,
            prompt.len(),
            self.max_output_tokens
        );

        match generator.generate(&prompt, self.max_output_tokens).await {
            Ok(text) => {
                info!("Generation succeeded: response_len={}", text.len());
                Ok(text)
            }
            Err(e) => Err(self.generation_failure(e.kind(), &e)),
        }
    }

    /// 字段必填与长度检查
    fn validate(&self, request: &GenerationRequest) -> AppResult<()> {
        if FormField::ALL
            .iter()
            .any(|&field| request.value(field).is_empty())
        {
            return Err(AppError::MissingFields);
        }

        if let Some(limit) = self.max_field_length {
            if let Some(field) = FormField::ALL
                .iter()
                .find(|&&field| request.value(field).chars().count() > limit)
            {
                return Err(AppError::FieldTooLong {
                    field: field.label(),
                    limit,
                });
            }
        }

        Ok(())
    }

    /// 记录完整错误信息，返回对外的通用错误
    fn generation_failure(
        &self,
        error_type: &str,
        err: &(dyn std::error::Error + 'static),
    ) -> AppError {
        error!("=== Generation Error Details ===");
        error!("Error type: {}", error_type);
        error!("Error message: {}", err);
        error!("Full error: {:?}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            error!("Caused by: {}", cause);
            source = cause.source();
        }
        error!("================================");

        AppError::Generation {
            details: self.expose_details.then(|| err.to_string()),
        }
    }
}
