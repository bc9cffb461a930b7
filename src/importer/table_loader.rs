// ==========================================
// Notion 导出转换 - 表格加载器
// ==========================================
// 职责: 整合导入流程，从 CSV 文件到 Article 列表
// 流程: 解析 → 表头清洗 → 表头绑定 → 逐行清洗 + 映射
// 红线: 只读输入文件，不产生任何写入
// ==========================================

use crate::domain::{Article, UnknownFieldPolicy};
use crate::importer::data_cleaner::DataCleaner as DataCleanerImpl;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::CsvParser;
use crate::importer::importer_trait::{DataCleaner, FieldMapper, FileParser};
use std::path::Path;
use tracing::{debug, info, instrument};

// ==========================================
// LoadedTable - 加载结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTable {
    pub header: Vec<String>,          // 清洗后的表头（保持原顺序）
    pub records: Vec<Article>,        // 与数据行一一对应，保持行序
    pub skipped_columns: Vec<String>, // Skip 策略下被忽略的未知列
}

// ==========================================
// TableLoader - 表格加载器
// ==========================================
pub struct TableLoader {
    file_parser: Box<dyn FileParser>,
    data_cleaner: Box<dyn DataCleaner>,
    field_mapper: Box<dyn FieldMapper>,
    unknown_field_policy: UnknownFieldPolicy,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::with_policy(UnknownFieldPolicy::default())
    }
}

impl TableLoader {
    /// 创建新的 TableLoader 实例
    pub fn new(
        file_parser: Box<dyn FileParser>,
        data_cleaner: Box<dyn DataCleaner>,
        field_mapper: Box<dyn FieldMapper>,
        unknown_field_policy: UnknownFieldPolicy,
    ) -> Self {
        Self {
            file_parser,
            data_cleaner,
            field_mapper,
            unknown_field_policy,
        }
    }

    /// 使用默认组件（CSV 解析 + 标准清洗 + 标准映射）
    pub fn with_policy(unknown_field_policy: UnknownFieldPolicy) -> Self {
        Self::new(
            Box::new(CsvParser),
            Box::new(DataCleanerImpl),
            Box::new(FieldMapperImpl),
            unknown_field_policy,
        )
    }

    /// 加载 CSV 文件
    ///
    /// # 返回
    /// - Ok(LoadedTable): 表头 + 记录列表
    /// - Err(InputUnreadable / MalformedTable / EmptyTable / UnknownField)
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(&self, path: P) -> ImportResult<LoadedTable> {
        // === 步骤 1: 解析文件 ===
        let raw = self.file_parser.parse_to_raw_table(path.as_ref())?;
        debug!(rows = raw.rows.len(), columns = raw.header.len(), "文件解析完成");

        // === 步骤 2: 表头清洗与绑定 ===
        let header = self.data_cleaner.clean_header(&raw.header);
        let mapping = self
            .field_mapper
            .bind_header(&header, self.unknown_field_policy)?;

        // === 步骤 3: 逐行映射 ===
        let records: Vec<Article> = raw
            .rows
            .iter()
            .map(|row| {
                let cells = row
                    .cells
                    .iter()
                    .map(|cell| self.data_cleaner.clean_cell(cell))
                    .collect();
                self.field_mapper.map_to_article(&mapping, cells)
            })
            .collect();

        info!(
            records = records.len(),
            skipped_columns = mapping.skipped_columns().len(),
            "CSV 加载完成"
        );

        Ok(LoadedTable {
            skipped_columns: mapping.skipped_columns().to_vec(),
            header,
            records,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_basic() {
        let file = write_csv(
            "Category,About,Status,Score,Link,Author,Publisher,Summary,Source\n\
             tech,golang-concurrency,read,9,http://example.com,jane,acme,concurrency is great,deep dive text\n",
        );

        let table = TableLoader::default().load(file.path()).unwrap();

        assert_eq!(table.header.len(), 9);
        assert_eq!(table.records.len(), 1);
        let article = &table.records[0];
        assert_eq!(article.category, "tech");
        assert_eq!(article.about, "golang-concurrency");
        assert_eq!(article.score, "9");
        assert_eq!(article.source, "deep dive text");
    }

    #[test]
    fn test_load_strips_bom_and_trims_header() {
        let file = write_csv("\u{feff}About , Category\nrust,tech\n");

        let table = TableLoader::with_policy(UnknownFieldPolicy::Reject)
            .load(file.path())
            .unwrap();

        assert_eq!(table.header, vec!["About", "Category"]);
        assert_eq!(table.records[0].about, "rust");
        assert_eq!(table.records[0].category, "tech");
    }

    #[test]
    fn test_load_normalizes_quotes() {
        let file = write_csv("About,Summary\nbook,O'Reilly's guide\n");

        let table = TableLoader::default().load(file.path()).unwrap();

        assert_eq!(table.records[0].summary, "O\"Reilly\"s guide");
    }

    #[test]
    fn test_load_keeps_row_order() {
        let file = write_csv("About\nfirst\nsecond\nthird\n");

        let table = TableLoader::default().load(file.path()).unwrap();

        let abouts: Vec<&str> = table.records.iter().map(|a| a.about.as_str()).collect();
        assert_eq!(abouts, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_load_unknown_field_policies() {
        let file = write_csv("About,Tags\nrust,lang\n");

        let lenient = TableLoader::with_policy(UnknownFieldPolicy::Skip)
            .load(file.path())
            .unwrap();
        assert_eq!(lenient.skipped_columns, vec!["Tags"]);
        assert_eq!(lenient.records[0].about, "rust");

        let strict = TableLoader::with_policy(UnknownFieldPolicy::Reject).load(file.path());
        assert!(matches!(strict, Err(ImportError::UnknownField { .. })));
    }

    #[test]
    fn test_load_header_only_is_empty_table() {
        let file = write_csv("Category,About\n");

        let result = TableLoader::default().load(file.path());

        assert!(matches!(result, Err(ImportError::EmptyTable(_))));
    }
}
