// ==========================================
// SpaceX 发射记录驾驶舱 - 驾驶舱 API
// ==========================================
// 职责: 持有只读 Dataset,实现两条更新规则
//   规则 A: 发射场 → 饼图
//   规则 B: 发射场 + 载荷区间 → 散点图
// 架构: API 层 → Engine 层（过滤 + 图表构建）
// 红线: 更新规则幂等、无副作用,推送由宿主进程负责
// ==========================================

use std::sync::Arc;

use crate::domain::selection::{Selection, SiteSelection};
use crate::engine::chart::{build_pie_chart, build_scatter_chart, PieSpec, ScatterSpec};
use crate::engine::filter::{filter_by_site, filter_for_scatter};
use crate::importer::Dataset;
use crate::perf::PerfGuard;

// ==========================================
// DashboardApi - 驾驶舱 API
// ==========================================

/// 驾驶舱API
///
/// Dataset 在进程内只读共享,多会话并发调用无需加锁
pub struct DashboardApi {
    dataset: Arc<Dataset>,
}

impl DashboardApi {
    /// 创建新的DashboardApi实例
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// 会话默认选择: ALL + 数据集载荷极值
    pub fn initial_selection(&self) -> Selection {
        Selection::initial(self.dataset.min_payload(), self.dataset.max_payload())
    }

    // ==========================================
    // 更新规则
    // ==========================================

    /// 规则 A: 饼图
    ///
    /// # 参数
    /// - site: 当前下拉框选择
    ///
    /// # 返回
    /// - ALL: 各发射场成功次数
    /// - 单发射场: 成功/失败计数
    pub fn update_pie_chart(&self, site: &SiteSelection) -> PieSpec {
        let mut perf = PerfGuard::new("update_pie_chart");

        let filtered = filter_by_site(self.dataset.records(), site);
        perf.set_rows(filtered.len());

        build_pie_chart(&filtered, site)
    }

    /// 规则 B: 散点图
    ///
    /// # 参数
    /// - selection: 发射场 + 载荷区间（先按载荷过滤,再按发射场过滤）
    pub fn update_scatter_chart(&self, selection: &Selection) -> ScatterSpec {
        let mut perf = PerfGuard::new("update_scatter_chart");

        let filtered = filter_for_scatter(self.dataset.records(), selection);
        perf.set_rows(filtered.len());

        build_scatter_chart(&filtered, &selection.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::launch::LaunchRecord;
    use crate::domain::selection::PayloadRange;

    fn pie_value(pie: &PieSpec, label: &str) -> Option<u64> {
        pie.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    fn api() -> DashboardApi {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", 1),
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", 0),
            LaunchRecord::new("KSC LC-39A", 5300.0, "FT", 1),
        ])
        .unwrap();
        DashboardApi::new(Arc::new(dataset))
    }

    #[test]
    fn test_initial_selection_uses_dataset_extremes() {
        let selection = api().initial_selection();
        assert!(selection.site.is_all());
        assert_eq!(selection.payload_range, PayloadRange::new(0.0, 5300.0));
    }

    #[test]
    fn test_update_pie_chart_modes() {
        let api = api();

        let all = api.update_pie_chart(&SiteSelection::All);
        assert_eq!(pie_value(&all, "CCAFS LC-40"), Some(1));
        assert_eq!(pie_value(&all, "KSC LC-39A"), Some(1));

        let single = api.update_pie_chart(&SiteSelection::from("CCAFS LC-40"));
        assert_eq!(pie_value(&single, "0"), Some(1));
        assert_eq!(pie_value(&single, "1"), Some(1));
    }

    #[test]
    fn test_update_scatter_chart_filters_payload_then_site() {
        let api = api();
        let selection = Selection {
            site: SiteSelection::from("CCAFS LC-40"),
            payload_range: PayloadRange::new(100.0, 10_000.0),
        };

        let scatter = api.update_scatter_chart(&selection);

        assert_eq!(scatter.points.len(), 1);
        assert_eq!(scatter.points[0].x, 500.0);
    }
}
