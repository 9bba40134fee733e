//! API 路由模块

mod config;
mod generate;
mod health;

pub use config::config_routes;
pub use generate::generate_routes;
pub use health::health_routes;

use axum::Router;

use crate::state::AppState;
use crate::ui::page_routes;
use std::sync::Arc;

/// 创建所有路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(page_routes())
        .merge(health_routes())
        .merge(config_routes())
        .merge(generate_routes())
        .with_state(state)
}
