// ==========================================
// Notion 导出转换 - 字段映射器实现
// ==========================================
// 阶段 2: 表头列名 → Article 字段绑定
// 规则: 按列名绑定，不依赖列顺序
// ==========================================

use crate::domain::{Article, ArticleField, UnknownFieldPolicy};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FieldMapper as FieldMapperTrait;
use tracing::warn;

// ==========================================
// HeaderMapping - 表头绑定结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMapping {
    columns: Vec<Option<ArticleField>>, // 第 i 列对应的字段
    skipped: Vec<String>,               // 被跳过的未知列名
}

impl HeaderMapping {
    pub fn field_at(&self, column: usize) -> Option<ArticleField> {
        self.columns.get(column).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn skipped_columns(&self) -> &[String] {
        &self.skipped
    }
}

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn bind_header(
        &self,
        header: &[String],
        policy: UnknownFieldPolicy,
    ) -> ImportResult<HeaderMapping> {
        let mut columns = Vec::with_capacity(header.len());
        let mut skipped = Vec::new();

        for (idx, name) in header.iter().enumerate() {
            match ArticleField::from_column_name(name) {
                Some(field) => columns.push(Some(field)),
                None => match policy {
                    UnknownFieldPolicy::Reject => {
                        return Err(ImportError::UnknownField {
                            column: idx + 1,
                            name: name.clone(),
                        });
                    }
                    UnknownFieldPolicy::Skip => {
                        warn!(column = idx + 1, name = %name, "未知表头字段，已跳过该列");
                        columns.push(None);
                        skipped.push(name.clone());
                    }
                },
            }
        }

        Ok(HeaderMapping { columns, skipped })
    }

    fn map_to_article(&self, mapping: &HeaderMapping, cells: Vec<Option<String>>) -> Article {
        let mut article = Article::default();

        for (idx, cell) in cells.into_iter().enumerate() {
            // 空单元格: 字段保持默认空字符串
            let Some(value) = cell else { continue };
            if let Some(field) = mapping.field_at(idx) {
                article.set(field, value);
            }
        }

        article
    }
}
