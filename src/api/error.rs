// ==========================================
// SpaceX 发射记录驾驶舱 - API层错误类型
// ==========================================
// 职责: 定义事件分发/请求解析错误
// 说明: 未知发射场、越界载荷区间不是错误,返回空图表
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    /// 组件/事件组合未注册更新规则
    #[error("未注册的事件: widget={widget}, event={event}")]
    UnknownEvent { widget: String, event: String },

    /// 请求体无法解析
    #[error("无效请求: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// 错误代码（返回给前端）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::UnknownEvent { .. } => "UNKNOWN_EVENT",
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
