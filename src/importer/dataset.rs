// ==========================================
// SpaceX 发射记录驾驶舱 - 数据集加载器
// ==========================================
// 流程: 文件解析 → 必填列校验 → 逐行映射 → 载荷极值
// 生命周期: 启动时加载一次,进程内只读共享
// ==========================================

use crate::domain::launch::{columns, LaunchRecord};
use crate::importer::error::{DataLoadError, DataLoadResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{FileParser, UniversalFileParser};
use std::path::Path;
use tracing::instrument;

// ==========================================
// Dataset - 只读发射记录表
// ==========================================
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl Dataset {
    /// 从文件加载数据集
    ///
    /// # 参数
    /// - path: .csv / .xlsx / .xls 文件路径
    ///
    /// # 返回
    /// - Ok(Dataset): 已校验的数据集（含载荷极值）
    /// - Err(DataLoadError): 文件缺失、格式错误、缺列、非法值、空表
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> DataLoadResult<Self> {
        let path = path.as_ref();
        let table = UniversalFileParser.parse(path)?;

        let mapper = FieldMapper;
        mapper.check_columns(&table)?;

        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(idx, row)| mapper.map_row(row, idx + 1))
            .collect::<DataLoadResult<Vec<_>>>()?;

        let dataset = Self::from_records(records).map_err(|e| match e {
            DataLoadError::EmptyDataset(_) => {
                DataLoadError::EmptyDataset(path.display().to_string())
            }
            other => other,
        })?;

        tracing::info!(
            rows = dataset.len(),
            min_payload = dataset.min_payload,
            max_payload = dataset.max_payload,
            "数据集加载完成"
        );

        Ok(dataset)
    }

    /// 从内存记录构建数据集（测试与嵌入场景）
    ///
    /// 与文件加载同样要求: 非空、outcome_class ∈ {0,1}、载荷非负
    pub fn from_records(records: Vec<LaunchRecord>) -> DataLoadResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            if record.outcome_class > 1 {
                return Err(DataLoadError::InvalidValue {
                    row: idx + 1,
                    field: columns::CLASS.to_string(),
                    value: record.outcome_class.to_string(),
                    message: "结果分类必须为 0 或 1".to_string(),
                });
            }
            if !record.payload_mass_kg.is_finite() || record.payload_mass_kg < 0.0 {
                return Err(DataLoadError::InvalidValue {
                    row: idx + 1,
                    field: columns::PAYLOAD_MASS_KG.to_string(),
                    value: record.payload_mass_kg.to_string(),
                    message: "载荷必须为非负有限数值".to_string(),
                });
            }
        }

        let (min_payload, max_payload) = records
            .iter()
            .map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or_else(|| DataLoadError::EmptyDataset("无数据行".to_string()))?;

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 全表最小载荷（加载时计算）
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// 全表最大载荷（加载时计算）
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }
}
