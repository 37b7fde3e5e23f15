// ==========================================
// SpaceX 发射记录驾驶舱 - 主入口
// ==========================================
// 启动顺序: 配置 → 日志 → 数据集 → 绑定端口 → 服务
// 数据集加载失败或端口不可用: 记录错误并以非零状态退出
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use spacex_launch_dashboard::app::{server, AppState};
use spacex_launch_dashboard::config::DashboardConfig;
use spacex_launch_dashboard::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = DashboardConfig::from_env().context("读取配置失败")?;

    // 初始化日志系统
    logging::init(config.log_json);

    tracing::info!("==================================================");
    tracing::info!("{}", spacex_launch_dashboard::APP_NAME);
    tracing::info!("系统版本: {}", spacex_launch_dashboard::VERSION);
    tracing::info!("==================================================");

    for warning in &config.warnings {
        tracing::warn!("{}", warning);
    }

    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!("数据集加载失败: {}", e);
            return Err(e).context("数据集加载失败");
        }
    };

    if let Err(e) = server::run(state).await {
        tracing::error!("驾驶舱服务失败: {}", e);
        return Err(e).context("驾驶舱服务失败");
    }

    tracing::info!("驾驶舱服务已退出");
    Ok(())
}
