// ==========================================
// SpaceX 发射记录驾驶舱 - 应用层
// ==========================================
// 职责: 视图模型、事件分发、HTTP 宿主进程
// ==========================================

pub mod events;
pub mod page;
pub mod server;
pub mod state;
pub mod view;

// 重导出
pub use events::{ChartOutput, EventKind, EventRegistry, Trigger, UpdateRule};
pub use server::{ServerStartError, UpdateRequest, UpdateResponse};
pub use state::AppState;
pub use view::{DashboardView, WidgetId};
