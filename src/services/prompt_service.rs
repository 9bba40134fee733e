//! Prompt 构建服务
//!
//! 把表单字段按固定模板拼接成生成提示词

use crate::models::{FormField, GenerationRequest};

/// 提示词开头
const PROMPT_HEADER: &str = "Please generate content based on the following requirements:";

/// 提示词结尾
const PROMPT_FOOTER: &str = "Please create comprehensive, well-structured content that addresses all these aspects. \
The content should be engaging, informative, and tailored to the specified audience and tone.";

/// Prompt 服务
pub struct PromptService;

impl PromptService {
    /// 创建新的 Prompt 服务
    pub fn new() -> Self {
        Self
    }

    /// 构建生成提示词
    ///
    /// 字段值原样插入，不做转义、清洗或截断
    pub fn build_generation_prompt(&self, request: &GenerationRequest) -> String {
        let fields = FormField::ALL
            .iter()
            .map(|&field| format!("{}: {}", field.label(), request.value(field)))
            .collect::<Vec<_>>()
            .join("\n");

        format!("{}\n\n{}\n\n{}", PROMPT_HEADER, fields, PROMPT_FOOTER)
    }
}

impl Default for PromptService {
    fn default() -> Self {
        Self::new()
    }
}
