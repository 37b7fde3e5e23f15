// ==========================================
// SpaceX 发射记录驾驶舱 - HTTP 宿主进程
// ==========================================
// 路由:
//   GET  /            页面外壳
//   GET  /api/layout  视图模型
//   POST /api/update  组件事件 → 更新规则 → 图表 figure
//   GET  /api/health  存活检查
// 红线: 端口绑定失败为致命错误,由 main 退出进程
// ==========================================

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::{ApiError, ApiResult};
use crate::app::events::{ChartOutput, Trigger};
use crate::app::page::INDEX_HTML;
use crate::app::state::AppState;
use crate::app::view::DashboardView;
use crate::domain::selection::Selection;

/// 服务启动错误
#[derive(Error, Debug)]
pub enum ServerStartError {
    #[error("端口绑定失败 ({addr}): {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("HTTP 服务异常退出: {0}")]
    Serve(#[source] std::io::Error),
}

// ==========================================
// 请求 / 响应
// ==========================================

/// 组件事件请求（携带会话内完整选择）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub trigger: Trigger,
    pub selection: Selection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub outputs: Vec<ChartOutput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rows: usize,
}

/// 错误响应（返回给前端）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownEvent { .. } | ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        tracing::warn!(code = self.code(), "请求失败: {}", self);

        let body = ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

// ==========================================
// 路由
// ==========================================

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/layout", get(layout))
        .route("/api/update", post(update))
        .route("/api/health", get(health))
        .with_state(state)
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn layout(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(state.view.clone())
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateRequest>, JsonRejection>,
) -> ApiResult<Json<UpdateResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;

    let outputs = state
        .events
        .dispatch(&state.dashboard_api, &request.trigger, &request.selection)?;

    Ok(Json(UpdateResponse { outputs }))
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        rows: state.dashboard_api.dataset().len(),
    })
}

// ==========================================
// 启动
// ==========================================

/// 绑定监听地址
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerStartError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerStartError::Bind { addr, source })
}

/// 在已绑定的监听器上提供服务,直到服务退出
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServerStartError> {
    match listener.local_addr() {
        Ok(addr) => tracing::info!("驾驶舱已启动: http://{}/", addr),
        Err(e) => tracing::warn!("无法获取监听地址: {}", e),
    }

    axum::serve(listener, router(state))
        .await
        .map_err(ServerStartError::Serve)
}

/// 按配置地址绑定并服务
pub async fn run(state: Arc<AppState>) -> Result<(), ServerStartError> {
    let listener = bind(state.config.bind_addr).await?;
    serve(listener, state).await
}
