//! LLM 模块
//!
//! 提供 Gemini 文本生成客户端，以及供中继服务依赖的生成能力 trait。

mod format;
mod gemini;
mod types;

pub use format::mask_api_key;
pub use gemini::GeminiClient;
pub use types::*;
