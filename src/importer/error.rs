// ==========================================
// SpaceX 发射记录驾驶舱 - 数据加载错误类型
// ==========================================
// 工具: thiserror 派生宏
// 启动期致命: 任一错误都不进入服务阶段
// ==========================================

use thiserror::Error;

/// 数据集加载错误
#[derive(Error, Debug)]
pub enum DataLoadError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .csv/.xlsx/.xls）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 结构错误 =====
    #[error("缺少必填列: {column}")]
    MissingColumn { column: String },

    #[error("数据集为空: {0}")]
    EmptyDataset(String),

    // ===== 数值错误 =====
    #[error("字段值非法 (行 {row}, 字段 {field}, 值 {value:?}): {message}")]
    InvalidValue {
        row: usize,
        field: String,
        value: String,
        message: String,
    },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for DataLoadError {
    fn from(err: std::io::Error) -> Self {
        DataLoadError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for DataLoadError {
    fn from(err: csv::Error) -> Self {
        DataLoadError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for DataLoadError {
    fn from(err: calamine::Error) -> Self {
        DataLoadError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type DataLoadResult<T> = Result<T, DataLoadError>;
