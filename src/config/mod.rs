// ==========================================
// SpaceX 发射记录驾驶舱 - 配置层
// ==========================================
// 职责: 数据路径、监听地址、界面语言、滑块刻度
// 存储: 无（默认值 + 环境变量覆写）
// ==========================================

pub mod dashboard_config;

// 重导出核心配置
pub use dashboard_config::{env_keys, ConfigError, DashboardConfig, SliderConfig};
