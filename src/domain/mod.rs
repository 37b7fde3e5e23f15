// ==========================================
// SpaceX 发射记录驾驶舱 - 领域模型层
// ==========================================
// 职责: 定义发射记录与选择状态类型
// 红线: 不含文件读取逻辑,不含过滤/图表逻辑
// ==========================================

pub mod launch;
pub mod selection;

// 重导出核心类型
pub use launch::{columns, LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};
pub use selection::{PayloadRange, Selection, SiteSelection, ALL_SITES, LAUNCH_SITES};
