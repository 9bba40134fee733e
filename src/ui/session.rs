//! 表单会话
//!
//! 表单字段和唯一的视图状态。错误、加载中、结果、空状态互斥，
//! 由 `ViewState` 一个值表达。

use async_trait::async_trait;
use tracing::warn;

use crate::models::{FormField, GenerationRequest};
use crate::services::GenerationService;

/// 生成请求返回非成功状态时显示的消息
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate content";

/// 没有可用错误信息时显示的消息
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// 视图状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// 尚无结果，显示空状态提示
    #[default]
    Idle,
    /// 请求进行中
    Loading,
    /// 显示错误横幅
    Error(String),
    /// 显示生成的文本
    Result(String),
}

/// 提交失败原因
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// 中继端点返回了非成功状态
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    RequestFailed,

    /// 客户端自身抛出的错误，如浏览器端的网络异常；进程内客户端不会产生
    #[cfg_attr(not(test), allow(dead_code))]
    #[error("{0}")]
    Client(String),
}

impl SubmitError {
    /// 错误横幅中显示的文本
    pub fn display_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// 把表单状态发送给中继端点的客户端
#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn submit(&self, request: &GenerationRequest) -> Result<String, SubmitError>;
}

/// 进程内客户端，直接调用中继服务
///
/// 所有中继错误都按非成功响应处理，只显示通用消息
pub struct RelayClient<'a> {
    service: &'a GenerationService,
}

impl<'a> RelayClient<'a> {
    pub fn new(service: &'a GenerationService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl<'a> GenerateClient for RelayClient<'a> {
    async fn submit(&self, request: &GenerationRequest) -> Result<String, SubmitError> {
        self.service.generate(request).await.map_err(|e| {
            warn!("Form submission failed: status={}, error={}", e.status_code(), e);
            SubmitError::RequestFailed
        })
    }
}

/// 表单会话
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    form: GenerationRequest,
    view: ViewState,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &GenerationRequest {
        &self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// 更新单个字段
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }

    /// 所有字段去除空白后非空且没有进行中的请求
    pub fn can_submit(&self) -> bool {
        self.form.is_complete() && !self.is_loading()
    }

    /// 开始提交：清除之前的错误和结果，进入加载状态
    ///
    /// 不允许提交时返回 None，状态保持不变
    pub fn begin_submit(&mut self) -> Option<GenerationRequest> {
        if !self.can_submit() {
            return None;
        }
        self.view = ViewState::Loading;
        Some(self.form.clone())
    }

    /// 结束提交，无论成功与否都离开加载状态
    pub fn finish(&mut self, outcome: Result<String, SubmitError>) {
        self.view = match outcome {
            Ok(text) if text.is_empty() => ViewState::Idle,
            Ok(text) => ViewState::Result(text),
            Err(e) => ViewState::Error(e.display_message()),
        };
    }

    /// 提交表单并等待结果，返回是否真正发出了请求
    pub async fn submit(&mut self, client: &dyn GenerateClient) -> bool {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = client.submit(&request).await;
        self.finish(outcome);
        true
    }
}
