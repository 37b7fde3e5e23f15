// ==========================================
// SpaceX 发射记录驾驶舱 - 核心库
// ==========================================
// 技术栈: Rust + axum + Plotly(前端)
// 系统定位: 只读数据看板（发射场 / 载荷 / 成功率）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 发射记录与选择状态
pub mod domain;

// 导入层 - 数据文件加载
pub mod importer;

// 引擎层 - 过滤与图表构建
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 更新规则
pub mod api;

// 应用层 - 视图、事件分发、HTTP 服务
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{LaunchRecord, PayloadRange, Selection, SiteSelection};

// 数据集
pub use importer::{DataLoadError, Dataset};

// 引擎
pub use engine::{
    build_pie_chart, build_scatter_chart, filter_by_payload, filter_by_site, filter_for_scatter,
    PieSpec, ScatterSpec,
};

// API
pub use api::DashboardApi;

// 应用
pub use app::{AppState, ServerStartError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "SpaceX Launch Records Dashboard";
