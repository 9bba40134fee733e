//! 页面渲染

use serde::Serialize;
use tera::{Context, Tera};

use super::session::{FormSession, ViewState};
use crate::error::AppError;
use crate::models::FormField;

const PAGE_TEMPLATE_NAME: &str = "index.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Serialize)]
struct FieldView {
    key: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: String,
}

#[derive(Serialize)]
struct PageView {
    fields: Vec<FieldView>,
    /// idle / loading / error / result
    view: &'static str,
    message: String,
    loading: bool,
    can_submit: bool,
}

impl PageView {
    fn from_session(session: &FormSession) -> Self {
        let fields = FormField::ALL
            .iter()
            .map(|&field| FieldView {
                key: field.key(),
                label: field.label(),
                placeholder: field.placeholder(),
                value: session.form().value(field).to_string(),
            })
            .collect();

        let (view, message) = match session.view() {
            ViewState::Idle => ("idle", String::new()),
            ViewState::Loading => ("loading", String::new()),
            ViewState::Error(message) => ("error", message.clone()),
            ViewState::Result(text) => ("result", text.clone()),
        };

        Self {
            fields,
            view,
            message,
            loading: session.is_loading(),
            can_submit: session.can_submit(),
        }
    }
}

/// 页面渲染器，模板在启动时解析一次
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        // 模板名以 .html 结尾，变量输出自动转义
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| AppError::Render(format!("invalid page template: {}", e)))?;
        Ok(Self { tera })
    }

    /// 按会话当前状态渲染整页
    pub fn render(&self, session: &FormSession) -> Result<String, AppError> {
        let context = Context::from_serialize(PageView::from_session(session))
            .map_err(|e| AppError::Render(e.to_string()))?;
        self.tera
            .render(PAGE_TEMPLATE_NAME, &context)
            .map_err(|e| AppError::Render(e.to_string()))
    }
}
