// ==========================================
// SpaceX 发射记录驾驶舱 - 应用状态
// ==========================================
// 职责: 启动时构建的应用上下文,显式传给路由处理器
// 内容: 配置 + 只读数据集 + 视图模型 + 事件绑定表
// ==========================================

use std::sync::Arc;

use crate::api::DashboardApi;
use crate::app::events::EventRegistry;
use crate::app::view::DashboardView;
use crate::config::DashboardConfig;
use crate::domain::selection::PayloadRange;
use crate::importer::{DataLoadResult, Dataset};

/// 应用状态
///
/// 构建后不再修改,以 `Arc<AppState>` 在请求间共享
pub struct AppState {
    /// 运行配置
    pub config: DashboardConfig,

    /// 驾驶舱API（持有只读 Dataset）
    pub dashboard_api: Arc<DashboardApi>,

    /// 视图模型（加载时确定默认选择）
    pub view: DashboardView,

    /// 事件绑定表
    pub events: EventRegistry,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - config: 运行配置（含数据文件路径）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(DataLoadError): 数据集加载失败（启动期致命）
    pub fn new(config: DashboardConfig) -> DataLoadResult<Self> {
        tracing::info!("初始化AppState，数据文件: {}", config.data_path.display());

        let dataset = Dataset::load(&config.data_path)?;
        Ok(Self::from_dataset(dataset, config))
    }

    /// 由已加载的数据集构建
    pub fn from_dataset(dataset: Dataset, config: DashboardConfig) -> Self {
        let default_range = PayloadRange::new(dataset.min_payload(), dataset.max_payload());
        let view = DashboardView::build(&config.slider, default_range, &config.locale);

        Self {
            dashboard_api: Arc::new(DashboardApi::new(Arc::new(dataset))),
            view,
            events: EventRegistry::dashboard(),
            config,
        }
    }
}
