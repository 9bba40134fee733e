//! 服务层模块

mod generation_service;
mod prompt_service;

pub use generation_service::GenerationService;
pub use prompt_service::PromptService;

#[cfg(test)]
pub(crate) use generation_service::tests::StubGenerator;
