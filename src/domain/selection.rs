// ==========================================
// SpaceX 发射记录驾驶舱 - 选择状态类型
// ==========================================
// 选择状态归前端会话所有,不持久化
// 后端每次事件都收到完整选择,自身无状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// "全部发射场" 哨兵值
pub const ALL_SITES: &str = "ALL";

/// 已知发射场枚举（下拉框选项顺序）
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];

// ==========================================
// SiteSelection - 发射场选择
// ==========================================
// 序列化格式: 纯字符串, "ALL" 为哨兵
// 未知发射场不报错,按等值过滤得到空集
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }

    /// 单发射场模式下的发射场名
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name),
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(name) => write!(f, "{}", name),
        }
    }
}

// ==========================================
// PayloadRange - 载荷区间（闭区间）
// ==========================================
// 序列化格式: [low, high]（与滑块取值一致）
// low > high 不报错,过滤结果为空集
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// 闭区间包含判断（两端都包含）
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([low, high]: [f64; 2]) -> Self {
        Self { low, high }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

// ==========================================
// Selection - 一次事件携带的完整选择
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl Selection {
    /// 默认选择: 全部发射场 + 数据集完整载荷区间
    pub fn initial(min_payload: f64, max_payload: f64) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(min_payload, max_payload),
        }
    }
}
