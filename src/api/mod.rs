// ==========================================
// SpaceX 发射记录驾驶舱 - API 层
// ==========================================
// 职责: 提供更新规则接口,供事件分发调用
// ==========================================

pub mod dashboard_api;
pub mod error;

// 重导出核心类型
pub use dashboard_api::DashboardApi;
pub use error::{ApiError, ApiResult};
