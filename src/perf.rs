use std::time::Instant;

/// 性能统计 Guard：记录 elapsed_ms + 输出行数
///
/// 使用方式：
/// ```ignore
/// let mut perf = spacex_launch_dashboard::perf::PerfGuard::new("update_pie_chart");
/// // do work...
/// perf.set_rows(filtered.len());
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: Option<usize>,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            rows: None,
        }
    }

    /// 记录本次操作处理后的行数
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = Some(rows);
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;

        match self.rows {
            Some(rows) => tracing::debug!(target: "perf", op = self.op, elapsed_ms, rows, "done"),
            None => tracing::debug!(target: "perf", op = self.op, elapsed_ms, "done"),
        }
    }
}
