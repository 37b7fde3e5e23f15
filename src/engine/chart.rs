// ==========================================
// SpaceX 发射记录驾驶舱 - 图表构建引擎
// ==========================================
// 职责: 已过滤记录 → 声明式图表描述（饼图 / 散点图）
// 红线: 纯函数,相同输入必得相同输出
// 渲染: to_figure() 输出 Plotly 兼容 JSON,前端直接绘制
// ==========================================

use crate::domain::launch::{columns, LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};
use crate::domain::selection::SiteSelection;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ==========================================
// 饼图
// ==========================================

/// 饼图模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieMode {
    /// 全部发射场: 每个发射场一块,值 = 成功次数
    AllSites,
    /// 单发射场: 按结果分类计数
    SingleSite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSpec {
    pub title: String,
    pub mode: PieMode,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Plotly figure JSON
    pub fn to_figure(&self) -> Value {
        let labels: Vec<&str> = self.slices.iter().map(|s| s.label.as_str()).collect();
        let values: Vec<u64> = self.slices.iter().map(|s| s.value).collect();

        json!({
            "data": [{
                "type": "pie",
                "labels": labels,
                "values": values,
                "sort": false,
            }],
            "layout": {
                "title": { "text": self.title },
            },
        })
    }
}

/// 构建饼图
///
/// - 全部发射场: 每个出现过的发射场一块（按首次出现顺序）,值为 outcome_class 之和
/// - 单发射场: 子集非空时固定输出 "0"、"1" 两块（计数可为 0）;子集为空时无切片
pub fn build_pie_chart(records: &[&LaunchRecord], site: &SiteSelection) -> PieSpec {
    match site {
        SiteSelection::All => {
            let mut slices: Vec<PieSlice> = Vec::new();
            for record in records {
                let success = u64::from(record.outcome_class);
                match slices.iter_mut().find(|s| s.label == record.launch_site) {
                    Some(slice) => slice.value += success,
                    None => slices.push(PieSlice {
                        label: record.launch_site.clone(),
                        value: success,
                    }),
                }
            }

            PieSpec {
                title: "Total Success Launches by Site".to_string(),
                mode: PieMode::AllSites,
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let slices = if records.is_empty() {
                Vec::new()
            } else {
                [OUTCOME_FAILURE, OUTCOME_SUCCESS]
                    .into_iter()
                    .map(|class| PieSlice {
                        label: class.to_string(),
                        value: records.iter().filter(|r| r.outcome_class == class).count() as u64,
                    })
                    .collect()
            };

            PieSpec {
                title: format!("Total Success vs. Failure Launches for {}", name),
                mode: PieMode::SingleSite,
                slices,
            }
        }
    }
}

// ==========================================
// 散点图
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// 载荷质量 kg
    pub x: f64,
    /// 结果分类 0/1
    pub y: u8,
    /// 着色分组键（助推器类别）
    pub group: String,
    /// 悬停提示
    pub hover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterSpec {
    /// 分组键（按首次出现顺序）
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for point in &self.points {
            if !groups.contains(&point.group.as_str()) {
                groups.push(&point.group);
            }
        }
        groups
    }

    /// Plotly figure JSON: 每个分组一条 trace
    pub fn to_figure(&self) -> Value {
        let traces: Vec<Value> = self
            .groups()
            .into_iter()
            .map(|group| {
                let members: Vec<&ScatterPoint> =
                    self.points.iter().filter(|p| p.group == group).collect();
                json!({
                    "type": "scatter",
                    "mode": "markers",
                    "name": group,
                    "x": members.iter().map(|p| p.x).collect::<Vec<_>>(),
                    "y": members.iter().map(|p| p.y).collect::<Vec<_>>(),
                    "text": members
                        .iter()
                        .map(|p| p.hover.clone().unwrap_or_default())
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "data": traces,
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_label } },
                "yaxis": { "title": { "text": self.y_label } },
                "legend": { "title": { "text": self.color_label } },
            },
        })
    }
}

/// 构建散点图: 每条记录一个点,x = 载荷, y = 结果分类, 按助推器类别着色
pub fn build_scatter_chart(records: &[&LaunchRecord], site: &SiteSelection) -> ScatterSpec {
    let site_label = match site {
        SiteSelection::All => "All Sites",
        SiteSelection::Site(name) => name.as_str(),
    };

    ScatterSpec {
        title: format!("Payload vs. Outcome for {}", site_label),
        x_label: columns::PAYLOAD_MASS_KG.to_string(),
        y_label: columns::CLASS.to_string(),
        color_label: columns::BOOSTER_VERSION_CATEGORY.to_string(),
        points: records
            .iter()
            .map(|r| ScatterPoint {
                x: r.payload_mass_kg,
                y: r.outcome_class,
                group: r.booster_category.clone(),
                hover: hover_text(r),
            })
            .collect(),
    }
}

fn hover_text(record: &LaunchRecord) -> Option<String> {
    match (record.flight_number, record.booster_version.as_deref()) {
        (Some(n), Some(v)) => Some(format!("Flight {} · {}", n, v)),
        (Some(n), None) => Some(format!("Flight {}", n)),
        (None, Some(v)) => Some(v.to_string()),
        (None, None) => None,
    }
}
