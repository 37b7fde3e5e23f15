// ==========================================
// SpaceX 发射记录驾驶舱 - 字段映射器实现
// ==========================================
// 职责: 原始行 → LaunchRecord 映射 + 类型转换 + 不变量校验
// 行号: 数据行从 1 开始计数（不含表头）
// ==========================================

use crate::domain::launch::{columns, LaunchRecord, OUTCOME_FAILURE, OUTCOME_SUCCESS};
use crate::importer::error::{DataLoadError, DataLoadResult};
use crate::importer::file_parser::RawTable;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapper {
    /// 校验必填列
    pub fn check_columns(&self, table: &RawTable) -> DataLoadResult<()> {
        for column in columns::REQUIRED {
            if !table.has_column(column) {
                return Err(DataLoadError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// 映射单行
    pub fn map_row(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> DataLoadResult<LaunchRecord> {
        let launch_site = self.get_string(row, columns::LAUNCH_SITE).ok_or_else(|| {
            invalid(row_number, columns::LAUNCH_SITE, "", "发射场不能为空")
        })?;

        Ok(LaunchRecord {
            launch_site,
            payload_mass_kg: self.parse_payload(row, row_number)?,
            booster_category: self
                .get_string(row, columns::BOOSTER_VERSION_CATEGORY)
                .unwrap_or_default(),
            outcome_class: self.parse_class(row, row_number)?,
            flight_number: self.parse_flight_number(row, row_number)?,
            booster_version: self.get_string(row, columns::BOOSTER_VERSION),
        })
    }

    // ==========================================
    // 辅助方法
    // ==========================================

    fn get_string(&self, row: &HashMap<String, String>, field: &str) -> Option<String> {
        row.get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn raw<'a>(&self, row: &'a HashMap<String, String>, field: &str) -> &'a str {
        row.get(field).map(|v| v.trim()).unwrap_or("")
    }

    /// 载荷: 有限数值且 ≥ 0
    fn parse_payload(&self, row: &HashMap<String, String>, row_number: usize) -> DataLoadResult<f64> {
        let raw = self.raw(row, columns::PAYLOAD_MASS_KG);
        let value: f64 = raw
            .parse()
            .map_err(|_| invalid(row_number, columns::PAYLOAD_MASS_KG, raw, "不是数值"))?;

        if !value.is_finite() || value < 0.0 {
            return Err(invalid(
                row_number,
                columns::PAYLOAD_MASS_KG,
                raw,
                "载荷必须为非负有限数值",
            ));
        }
        Ok(value)
    }

    /// 结果分类: 0/1,接受 "1.0" 这类整数写法
    fn parse_class(&self, row: &HashMap<String, String>, row_number: usize) -> DataLoadResult<u8> {
        let raw = self.raw(row, columns::CLASS);
        let value: f64 = raw
            .parse()
            .map_err(|_| invalid(row_number, columns::CLASS, raw, "不是数值"))?;

        if value == f64::from(OUTCOME_FAILURE) {
            Ok(OUTCOME_FAILURE)
        } else if value == f64::from(OUTCOME_SUCCESS) {
            Ok(OUTCOME_SUCCESS)
        } else {
            Err(invalid(row_number, columns::CLASS, raw, "结果分类必须为 0 或 1"))
        }
    }

    fn parse_flight_number(
        &self,
        row: &HashMap<String, String>,
        row_number: usize,
    ) -> DataLoadResult<Option<u32>> {
        match self.get_string(row, columns::FLIGHT_NUMBER) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u32>()
                .map(Some)
                .map_err(|_| invalid(row_number, columns::FLIGHT_NUMBER, &raw, "不是正整数")),
        }
    }
}

fn invalid(row: usize, field: &str, value: &str, message: &str) -> DataLoadError {
    DataLoadError::InvalidValue {
        row,
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}
