// ==========================================
// Notion 导出转换 - 数据清洗器实现
// ==========================================
// 阶段 1: 表头 TRIM / BOM 去除 / 单元格引号标准化
// ==========================================

use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

/// UTF-8 字节序标记
pub const BOM: char = '\u{feff}';

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_header(&self, header: &[String]) -> Vec<String> {
        header
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let trimmed = cell.trim();
                if idx == 0 {
                    self.strip_bom(trimmed).trim().to_string()
                } else {
                    trimmed.to_string()
                }
            })
            .collect()
    }

    fn clean_cell(&self, value: &str) -> Option<String> {
        if value.is_empty() {
            return None;
        }
        Some(self.normalize_quotes(value))
    }
}

impl DataCleaner {
    /// 去除开头的 BOM（可能重复出现）
    pub fn strip_bom<'a>(&self, value: &'a str) -> &'a str {
        value.trim_start_matches(BOM)
    }

    /// 单引号 → 双引号
    ///
    /// 模板中字段值被单引号包裹，值内单引号一律替换，有损且不可逆
    pub fn normalize_quotes(&self, value: &str) -> String {
        if value.contains('\'') {
            value.replace('\'', "\"")
        } else {
            value.to_string()
        }
    }
}
