// ==========================================
// Notion 导出转换 - 冲突处理器实现
// ==========================================
// 职责: 检测同一批次内输出路径重复的记录
// 说明: About 相同（非平铺模式下还需 Category 相同）即视为重复
// ==========================================

use crate::domain::{Article, OutputLayout};
use crate::importer::importer_trait::ConflictHandler as ConflictHandlerTrait;
use crate::renderer::path_resolver;
use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

// ==========================================
// DuplicateDocument - 重名文档
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateDocument {
    pub row_number: usize,       // 重复出现的数据行号（从 1 开始）
    pub first_row_number: usize, // 首次出现的数据行号
    pub relative_path: PathBuf,  // 相对输出根目录的文件路径
}

pub struct ConflictHandler;

impl ConflictHandlerTrait for ConflictHandler {
    fn detect_duplicates(
        &self,
        records: &[Article],
        layout: OutputLayout,
    ) -> Vec<DuplicateDocument> {
        let mut first_occurrence: HashMap<PathBuf, usize> = HashMap::new();
        let mut duplicates = Vec::new();

        for (idx, record) in records.iter().enumerate() {
            let row_number = idx + 1;
            let relative_path = path_resolver::relative_document_path(record, layout);

            if let Some(&first_row_number) = first_occurrence.get(&relative_path) {
                duplicates.push(DuplicateDocument {
                    row_number,
                    first_row_number,
                    relative_path,
                });
            } else {
                first_occurrence.insert(relative_path, row_number);
            }
        }

        duplicates
    }
}
