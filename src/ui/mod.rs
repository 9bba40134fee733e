//! 表单页面
//!
//! `GET /` 渲染空表单；`POST /` 是不执行脚本时的表单提交回退路径，
//! 在进程内走同一个中继服务，然后重新渲染整页。

mod page;
mod session;

pub use page::PageRenderer;
pub use session::{FormSession, RelayClient};

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Form, Router,
};
use std::sync::Arc;
use tracing::{info_span, Instrument};

use crate::error::AppResult;
use crate::models::FormField;
use crate::state::AppState;

/// 渲染初始页面
async fn index_page(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    Ok(Html(state.pages.render(&FormSession::new())?))
}

/// 处理表单提交
///
/// 未知字段忽略，缺失字段保持为空
async fn submit_form(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> AppResult<Html<String>> {
    let mut session = FormSession::new();
    for (key, value) in pairs {
        if let Some(field) = FormField::from_key(&key) {
            session.update(field, value);
        }
    }
    let client = RelayClient::new(&state.generation);

    session
        .submit(&client)
        .instrument(info_span!("form_submit"))
        .await;

    Ok(Html(state.pages.render(&session)?))
}

/// 创建页面路由
pub fn page_routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index_page).post(submit_form))
}
