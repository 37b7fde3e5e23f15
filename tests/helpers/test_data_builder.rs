// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use spacex_launch_dashboard::domain::LaunchRecord;
use spacex_launch_dashboard::importer::Dataset;

// ==========================================
// LaunchRecord 构建器
// ==========================================

pub struct LaunchBuilder {
    launch_site: String,
    payload_mass_kg: f64,
    booster_category: String,
    outcome_class: u8,
    flight_number: Option<u32>,
}

impl LaunchBuilder {
    pub fn new(launch_site: &str) -> Self {
        Self {
            launch_site: launch_site.to_string(),
            payload_mass_kg: 0.0,
            booster_category: "FT".to_string(),
            outcome_class: 0,
            flight_number: None,
        }
    }

    pub fn payload(mut self, kg: f64) -> Self {
        self.payload_mass_kg = kg;
        self
    }

    pub fn booster(mut self, category: &str) -> Self {
        self.booster_category = category.to_string();
        self
    }

    pub fn success(mut self) -> Self {
        self.outcome_class = 1;
        self
    }

    pub fn failure(mut self) -> Self {
        self.outcome_class = 0;
        self
    }

    pub fn flight(mut self, number: u32) -> Self {
        self.flight_number = Some(number);
        self
    }

    pub fn build(self) -> LaunchRecord {
        let mut record = LaunchRecord::new(
            self.launch_site,
            self.payload_mass_kg,
            self.booster_category,
            self.outcome_class,
        );
        record.flight_number = self.flight_number;
        record
    }
}

/// 由构建器列表生成数据集
pub fn dataset_of(records: Vec<LaunchBuilder>) -> Dataset {
    Dataset::from_records(records.into_iter().map(LaunchBuilder::build).collect())
        .expect("测试数据集构建失败")
}
