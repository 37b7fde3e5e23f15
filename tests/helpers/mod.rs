// ==========================================
// 集成测试公共工具
// ==========================================

#![allow(dead_code)]

pub mod test_data_builder;

use std::io::Write;
use std::path::PathBuf;
use spacex_launch_dashboard::engine::PieSpec;
use tempfile::NamedTempFile;

/// 样例数据文件（14 次发射,4 个发射场）
pub fn sample_csv_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("spacex_launch_sample.csv")
}

/// 写入临时文件（指定扩展名）
pub fn write_temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("无法创建临时文件");
    file.write_all(content.as_bytes()).expect("写入临时文件失败");
    file
}

/// 工作簿数据行: (Flight Number, Launch Site, class, Payload Mass (kg), Booster Version, Booster Version Category)
pub type XlsxRow<'a> = (f64, &'a str, f64, f64, &'a str, &'a str);

/// 写入临时 .xlsx 工作簿（数值列写为数值单元格）
pub fn write_temp_xlsx(rows: &[XlsxRow]) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("无法创建临时文件");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in CSV_HEADER.split(',').enumerate() {
        sheet.write_string(0, col as u16, header).expect("写入表头失败");
    }
    for (idx, (flight, site, class, payload, version, category)) in rows.iter().enumerate() {
        let row = idx as u32 + 1;
        sheet.write_number(row, 0, *flight).expect("写入单元格失败");
        sheet.write_string(row, 1, *site).expect("写入单元格失败");
        sheet.write_number(row, 2, *class).expect("写入单元格失败");
        sheet.write_number(row, 3, *payload).expect("写入单元格失败");
        sheet.write_string(row, 4, *version).expect("写入单元格失败");
        sheet.write_string(row, 5, *category).expect("写入单元格失败");
    }
    workbook.save(file.path()).expect("保存工作簿失败");
    file
}

/// 饼图中指定切片的值
pub fn pie_value(pie: &PieSpec, label: &str) -> Option<u64> {
    pie.slices.iter().find(|s| s.label == label).map(|s| s.value)
}

/// 数据文件标准表头
pub const CSV_HEADER: &str =
    "Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";
