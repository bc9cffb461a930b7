// ==========================================
// Notion 导出转换 - 转换结果汇总
// ==========================================
// 用途: 转换成功后向调用方报告（human / json 两种输出）
// ==========================================

use crate::domain::types::OutputLayout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertSummary {
    pub batch_id: String,          // 批次 ID（UUID）
    pub started_at: DateTime<Utc>, // 开始时间
    pub input: PathBuf,
    pub output: PathBuf,
    pub layout: OutputLayout,
    pub total_records: usize,         // 数据行数
    pub files_written: usize,         // 最终落盘的文档数
    pub overwritten: usize,           // 因重名被覆盖的记录数
    pub skipped_columns: Vec<String>, // 被忽略的未知列
    pub elapsed_ms: u64,
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "convert success")?;
        writeln!(f, "  batch:     {}", self.batch_id)?;
        writeln!(f, "  input:     {}", self.input.display())?;
        writeln!(f, "  output:    {} ({})", self.output.display(), self.layout)?;
        writeln!(
            f,
            "  documents: {} written / {} records",
            self.files_written, self.total_records
        )?;
        if self.overwritten > 0 {
            writeln!(f, "  overwritten: {}", self.overwritten)?;
        }
        if !self.skipped_columns.is_empty() {
            writeln!(f, "  skipped columns: {}", self.skipped_columns.join(", "))?;
        }
        write!(f, "  elapsed:   {} ms", self.elapsed_ms)
    }
}
