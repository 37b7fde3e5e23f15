// ==========================================
// SpaceX 发射记录驾驶舱 - 引擎层
// ==========================================
// 职责: 过滤与图表构建,全部为纯函数
// 红线: 引擎不读文件,不持有状态
// ==========================================

pub mod chart;
pub mod filter;

// 重导出核心引擎
pub use chart::{
    build_pie_chart, build_scatter_chart, PieMode, PieSlice, PieSpec, ScatterPoint, ScatterSpec,
};
pub use filter::{filter_by_payload, filter_by_site, filter_for_scatter};
