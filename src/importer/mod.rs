// ==========================================
// SpaceX 发射记录驾驶舱 - 导入层
// ==========================================
// 职责: 外部数据文件 → 只读 Dataset
// 支持: CSV, Excel
// ==========================================

pub mod dataset;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use dataset::Dataset;
pub use error::{DataLoadError, DataLoadResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawTable, UniversalFileParser};
