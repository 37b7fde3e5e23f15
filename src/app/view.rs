// ==========================================
// SpaceX 发射记录驾驶舱 - 视图模型
// ==========================================
// 职责: 声明页面组件（下拉框、区间滑块、两个图表区域）
// 渲染: 视图模型序列化为 JSON,由页面脚本绘制;与更新规则解耦
// ==========================================

use crate::config::SliderConfig;
use crate::domain::selection::{PayloadRange, ALL_SITES, LAUNCH_SITES};
use crate::i18n::{t, t_with_args};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 组件标识
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetId {
    SiteDropdown,
    PayloadSlider,
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

impl WidgetId {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetId::SiteDropdown => "site-dropdown",
            WidgetId::PayloadSlider => "payload-slider",
            WidgetId::SuccessPieChart => "success-pie-chart",
            WidgetId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 组件描述
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownWidget {
    pub id: WidgetId,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderWidget {
    pub id: WidgetId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// 默认选中区间（数据集极值,不裁剪到 [min, max]）
    pub value: PayloadRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRegion {
    pub id: WidgetId,
}

// ==========================================
// DashboardView - 整页视图模型
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub heading: String,
    pub locale: String,
    pub dropdown: DropdownWidget,
    pub pie_chart: ChartRegion,
    pub slider: RangeSliderWidget,
    pub scatter_chart: ChartRegion,
}

impl DashboardView {
    /// 构建视图模型
    ///
    /// # 参数
    /// - slider: 滑块固定刻度
    /// - default_range: 默认选中载荷区间（加载时的数据集极值）
    /// - locale: 界面语言
    pub fn build(slider: &SliderConfig, default_range: PayloadRange, locale: &str) -> Self {
        let mut options = vec![DropdownOption {
            label: t("dashboard.all_sites", locale),
            value: ALL_SITES.to_string(),
        }];
        options.extend(LAUNCH_SITES.iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        Self {
            heading: t("dashboard.heading", locale),
            locale: locale.to_string(),
            dropdown: DropdownWidget {
                id: WidgetId::SiteDropdown,
                options,
                value: ALL_SITES.to_string(),
                placeholder: t("dashboard.site_placeholder", locale),
                searchable: true,
            },
            pie_chart: ChartRegion {
                id: WidgetId::SuccessPieChart,
            },
            slider: RangeSliderWidget {
                id: WidgetId::PayloadSlider,
                label: t("dashboard.payload_label", locale),
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider_marks(slider, locale),
                value: default_range,
            },
            scatter_chart: ChartRegion {
                id: WidgetId::SuccessPayloadScatterChart,
            },
        }
    }
}

/// 刻度标签: min..=max,间隔 mark_step
fn slider_marks(slider: &SliderConfig, locale: &str) -> Vec<SliderMark> {
    if slider.mark_step <= 0.0 || slider.max < slider.min {
        return Vec::new();
    }

    let count = ((slider.max - slider.min) / slider.mark_step).floor() as usize;
    (0..=count)
        .map(|i| {
            let value = slider.min + slider.mark_step * i as f64;
            let text = value.to_string();
            SliderMark {
                value,
                label: t_with_args("dashboard.slider_mark", locale, &[("value", text.as_str())]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_id_serde_kebab_case() {
        let json = serde_json::to_string(&WidgetId::SuccessPayloadScatterChart).unwrap();
        assert_eq!(json, "\"success-payload-scatter-chart\"");

        let parsed: WidgetId = serde_json::from_str("\"site-dropdown\"").unwrap();
        assert_eq!(parsed, WidgetId::SiteDropdown);
        assert_eq!(parsed.to_string(), "site-dropdown");
    }

    #[test]
    fn test_build_view_defaults() {
        let view = DashboardView::build(
            &SliderConfig::default(),
            PayloadRange::new(0.0, 9600.0),
            "en",
        );

        assert_eq!(view.heading, "SpaceX Launch Records Dashboard");
        assert_eq!(view.dropdown.value, "ALL");
        assert_eq!(view.dropdown.options.len(), 5);
        assert_eq!(view.dropdown.options[0].label, "All Sites");
        assert_eq!(view.dropdown.options[1].value, "CCAFS LC-40");
        assert!(view.dropdown.searchable);

        assert_eq!(view.slider.min, 0.0);
        assert_eq!(view.slider.max, 10_000.0);
        assert_eq!(view.slider.step, 1_000.0);
        assert_eq!(view.slider.value, PayloadRange::new(0.0, 9600.0));
    }

    #[test]
    fn test_slider_marks_every_2000() {
        let view = DashboardView::build(&SliderConfig::default(), PayloadRange::new(0.0, 1.0), "en");

        let values: Vec<f64> = view.slider.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 2000.0, 4000.0, 6000.0, 8000.0, 10000.0]);
        assert_eq!(view.slider.marks[1].label, "2000 Kg");
    }

    #[test]
    fn test_default_range_not_clamped_to_slider_bounds() {
        let view = DashboardView::build(
            &SliderConfig::default(),
            PayloadRange::new(0.0, 15_600.0),
            "en",
        );
        assert_eq!(view.slider.value.high, 15_600.0);
        assert_eq!(view.slider.max, 10_000.0);
    }

    #[test]
    fn test_build_view_localized() {
        let view = DashboardView::build(&SliderConfig::default(), PayloadRange::new(0.0, 1.0), "zh-CN");
        assert_eq!(view.dropdown.options[0].label, "全部发射场");
        // 发射场名称不翻译
        assert_eq!(view.dropdown.options[4].label, "VAFB SLC-4E");
    }
}
