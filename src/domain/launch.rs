// ==========================================
// SpaceX 发射记录驾驶舱 - 发射记录领域模型
// ==========================================
// 数据源: spacex_launch_dash.csv（每行一次发射）
// 用途: 导入层写入,引擎层只读
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 源文件列名
// ==========================================
pub mod columns {
    /// 发射场（必填）
    pub const LAUNCH_SITE: &str = "Launch Site";
    /// 载荷质量 kg（必填）
    pub const PAYLOAD_MASS_KG: &str = "Payload Mass (kg)";
    /// 助推器类别（必填，仅用于散点图着色）
    pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";
    /// 结果分类 0/1（必填）
    pub const CLASS: &str = "class";
    /// 飞行序号（可选）
    pub const FLIGHT_NUMBER: &str = "Flight Number";
    /// 助推器型号（可选）
    pub const BOOSTER_VERSION: &str = "Booster Version";

    /// 必填列全集
    pub const REQUIRED: [&str; 4] = [LAUNCH_SITE, PAYLOAD_MASS_KG, BOOSTER_VERSION_CATEGORY, CLASS];
}

// ==========================================
// 结果分类
// ==========================================
/// 失败
pub const OUTCOME_FAILURE: u8 = 0;
/// 成功
pub const OUTCOME_SUCCESS: u8 = 1;

// ==========================================
// LaunchRecord - 发射记录
// ==========================================
// 不变量: outcome_class ∈ {0,1}, payload_mass_kg ≥ 0（由导入层保证）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,              // 发射场标识
    pub payload_mass_kg: f64,             // 载荷质量（kg）
    pub booster_category: String,         // 助推器类别（着色分组键）
    pub outcome_class: u8,                // 1 = 成功, 0 = 失败

    // ===== 可选附加字段（悬停提示）=====
    pub flight_number: Option<u32>,       // 飞行序号
    pub booster_version: Option<String>,  // 助推器型号
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_category: impl Into<String>,
        outcome_class: u8,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_category: booster_category.into(),
            outcome_class,
            flight_number: None,
            booster_version: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome_class == OUTCOME_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        assert!(LaunchRecord::new("KSC LC-39A", 2490.0, "FT", 1).is_success());
        assert!(!LaunchRecord::new("KSC LC-39A", 2490.0, "FT", 0).is_success());
    }
}
