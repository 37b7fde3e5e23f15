// ==========================================
// SpaceX 发射记录驾驶舱 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析 → 原始表（表头 + 字符串行）
// 支持: CSV (.csv) / Excel (.xlsx/.xls)
// ==========================================

use crate::importer::error::{DataLoadError, DataLoadResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// RawTable - 原始表
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    /// 表头（已去首尾空白,保持文件顺序）
    pub headers: Vec<String>,
    /// 数据行（表头 → 单元格文本）
    pub rows: Vec<HashMap<String, String>>,
}

impl RawTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut row_map = HashMap::new();
        for (col_idx, value) in cells.into_iter().enumerate() {
            if let Some(header) = self.headers.get(col_idx) {
                row_map.insert(header.clone(), value.as_ref().trim().to_string());
            }
        }

        // 跳过完全空白的行
        if row_map.values().all(|v| v.is_empty()) {
            return;
        }

        self.rows.push(row_map);
    }
}

/// 文件解析器接口
pub trait FileParser {
    fn parse(&self, file_path: &Path) -> DataLoadResult<RawTable>;
}

fn ensure_exists(path: &Path) -> DataLoadResult<()> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse(&self, file_path: &Path) -> DataLoadResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(DataLoadError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut table = RawTable {
            headers: reader
                .headers()?
                .iter()
                .map(|h| h.trim().to_string())
                .collect(),
            rows: Vec::new(),
        };

        for result in reader.records() {
            let record = result?;
            table.push_row(record.iter());
        }

        Ok(table)
    }
}

// ==========================================
// Excel Parser 实现（读取第一个工作表）
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse(&self, file_path: &Path) -> DataLoadResult<RawTable> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(DataLoadError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| DataLoadError::ExcelParseError("Excel 文件无工作表".to_string()))?;
        let range = workbook.worksheet_range(&sheet_name)?;

        // 第一行为表头
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| DataLoadError::ExcelParseError("Excel 文件无表头行".to_string()))?;

        let mut table = RawTable {
            headers: header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            rows: Vec::new(),
        };

        for data_row in rows {
            table.push_row(data_row.iter().map(|cell| cell.to_string()));
        }

        Ok(table)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse(&self, file_path: &Path) -> DataLoadResult<RawTable> {
        ensure_exists(file_path)?;

        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse(file_path),
            "xlsx" | "xls" => ExcelParser.parse(file_path),
            other => Err(DataLoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_file_with(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_csv_parser_valid_file() {
        let file = temp_file_with(
            ".csv",
            "Launch Site , class\nCCAFS LC-40, 0\n\n , \nKSC LC-39A,1\n",
        );

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.headers, vec!["Launch Site", "class"]);
        // 空白行被跳过
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0]["Launch Site"], "CCAFS LC-40");
        assert_eq!(table.rows[1]["class"], "1");
    }

    #[test]
    fn test_csv_parser_short_rows_are_flexible() {
        let file = temp_file_with(".csv", "a,b,c\n1,2\n");

        let table = CsvParser.parse(file.path()).unwrap();

        assert_eq!(table.rows.len(), 1);
        assert!(!table.rows[0].contains_key("c"));
    }

    #[test]
    fn test_parser_file_not_found() {
        let result = UniversalFileParser.parse(Path::new("/nonexistent/launches.csv"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }

    #[test]
    fn test_parser_unsupported_format() {
        let file = temp_file_with(".json", "{}");
        let result = UniversalFileParser.parse(file.path());
        assert!(matches!(result, Err(DataLoadError::UnsupportedFormat(ext)) if ext == "json"));
    }

    #[test]
    fn test_csv_parser_rejects_excel_extension() {
        let file = temp_file_with(".xlsx", "not really excel");
        let result = CsvParser.parse(file.path());
        assert!(matches!(result, Err(DataLoadError::UnsupportedFormat(_))));
    }
}
