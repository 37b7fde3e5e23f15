// ==========================================
// SpaceX 发射记录驾驶舱 - 事件注册与分发
// ==========================================
// 绑定表: (组件, 事件) → [更新规则]
//   (site-dropdown,  change) → [饼图, 散点图]
//   (payload-slider, change) → [散点图]
//   initial（页面加载）      → 全部规则各执行一次
// 状态机: 单一 "空闲等待事件" 状态,无多步协议
// ==========================================

use crate::api::{ApiError, ApiResult, DashboardApi};
use crate::app::view::WidgetId;
use crate::domain::selection::Selection;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ==========================================
// 事件类型
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// 页面加载
    Initial,
    /// 组件取值变化
    Change,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Initial => write!(f, "initial"),
            EventKind::Change => write!(f, "change"),
        }
    }
}

/// 触发源（initial 事件不带组件）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    #[serde(default)]
    pub widget: Option<WidgetId>,
    pub event: EventKind,
}

impl Trigger {
    pub fn initial() -> Self {
        Self {
            widget: None,
            event: EventKind::Initial,
        }
    }

    pub fn change(widget: WidgetId) -> Self {
        Self {
            widget: Some(widget),
            event: EventKind::Change,
        }
    }
}

// ==========================================
// 更新规则
// ==========================================

/// 更新规则: 选择 → 图表 figure
#[derive(Clone, Copy)]
pub struct UpdateRule {
    pub name: &'static str,
    pub target: WidgetId,
    pub run: fn(&DashboardApi, &Selection) -> Value,
}

impl fmt::Debug for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRule")
            .field("name", &self.name)
            .field("target", &self.target)
            .finish()
    }
}

fn run_pie_rule(api: &DashboardApi, selection: &Selection) -> Value {
    api.update_pie_chart(&selection.site).to_figure()
}

fn run_scatter_rule(api: &DashboardApi, selection: &Selection) -> Value {
    api.update_scatter_chart(selection).to_figure()
}

/// 规则 A: 下拉框 → 饼图
pub const PIE_RULE: UpdateRule = UpdateRule {
    name: "pie",
    target: WidgetId::SuccessPieChart,
    run: run_pie_rule,
};

/// 规则 B: 下拉框 / 滑块 → 散点图
pub const SCATTER_RULE: UpdateRule = UpdateRule {
    name: "scatter",
    target: WidgetId::SuccessPayloadScatterChart,
    run: run_scatter_rule,
};

/// 一次规则执行的输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOutput {
    pub target: WidgetId,
    pub figure: Value,
}

// ==========================================
// EventRegistry - 显式事件绑定表
// ==========================================
#[derive(Debug, Clone)]
struct Binding {
    widget: WidgetId,
    event: EventKind,
    rules: Vec<UpdateRule>,
}

#[derive(Debug, Clone, Default)]
pub struct EventRegistry {
    bindings: Vec<Binding>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 驾驶舱标准绑定
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(WidgetId::SiteDropdown, EventKind::Change, PIE_RULE);
        registry.register(WidgetId::SiteDropdown, EventKind::Change, SCATTER_RULE);
        registry.register(WidgetId::PayloadSlider, EventKind::Change, SCATTER_RULE);
        registry
    }

    /// 注册规则（同一绑定内按注册顺序执行）
    pub fn register(&mut self, widget: WidgetId, event: EventKind, rule: UpdateRule) {
        match self
            .bindings
            .iter_mut()
            .find(|b| b.widget == widget && b.event == event)
        {
            Some(binding) => binding.rules.push(rule),
            None => self.bindings.push(Binding {
                widget,
                event,
                rules: vec![rule],
            }),
        }
    }

    /// 查找触发源对应的规则
    ///
    /// initial: 全部已注册规则去重（按名称）后各一次
    pub fn rules_for(&self, trigger: &Trigger) -> ApiResult<Vec<UpdateRule>> {
        match (trigger.event, trigger.widget) {
            (EventKind::Initial, _) => {
                let mut rules: Vec<UpdateRule> = Vec::new();
                for rule in self.bindings.iter().flat_map(|b| b.rules.iter()) {
                    if !rules.iter().any(|r| r.name == rule.name) {
                        rules.push(*rule);
                    }
                }
                Ok(rules)
            }
            (event, Some(widget)) => self
                .bindings
                .iter()
                .find(|b| b.widget == widget && b.event == event)
                .map(|b| b.rules.clone())
                .ok_or_else(|| ApiError::UnknownEvent {
                    widget: widget.to_string(),
                    event: event.to_string(),
                }),
            (event, None) => Err(ApiError::UnknownEvent {
                widget: String::new(),
                event: event.to_string(),
            }),
        }
    }

    /// 分发事件: 执行匹配规则并收集输出
    pub fn dispatch(
        &self,
        api: &DashboardApi,
        trigger: &Trigger,
        selection: &Selection,
    ) -> ApiResult<Vec<ChartOutput>> {
        let rules = self.rules_for(trigger)?;

        tracing::debug!(
            widget = ?trigger.widget,
            event = %trigger.event,
            rules = rules.len(),
            "分发事件"
        );

        Ok(rules
            .into_iter()
            .map(|rule| ChartOutput {
                target: rule.target,
                figure: (rule.run)(api, selection),
            })
            .collect())
    }
}
