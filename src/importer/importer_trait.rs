// ==========================================
// Notion 导出转换 - 导入组件 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 表头/单元格清洗 → 字段绑定 → 重名检测
// ==========================================

use crate::domain::{Article, OutputLayout, UnknownFieldPolicy};
use crate::importer::conflict_handler::DuplicateDocument;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::HeaderMapping;
use crate::importer::file_parser::RawTable;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表（表头 + 数据行）
    ///
    /// # 返回
    /// - Ok(RawTable): 至少包含表头和一行数据
    /// - Err(InputUnreadable): 文件无法读取
    /// - Err(MalformedTable): CSV 结构错误（引号不闭合、行长度不一致等）
    /// - Err(EmptyTable): 缺少表头或没有数据行
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 1）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 清洗表头（逐列 TRIM，首列额外去除 BOM）
    fn clean_header(&self, header: &[String]) -> Vec<String>;

    /// 清洗单元格
    ///
    /// # 返回
    /// - None: 空单元格（字段保持默认空字符串）
    /// - Some(String): 单引号已替换为双引号的值
    fn clean_cell(&self, value: &str) -> Option<String>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段绑定接口（阶段 2）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 将清洗后的表头绑定到 Article 字段
    ///
    /// # 返回
    /// - Ok(HeaderMapping): 每一列对应的字段（未知列为 None）
    /// - Err(UnknownField): policy 为 Reject 且存在未知列
    fn bind_header(
        &self,
        header: &[String],
        policy: UnknownFieldPolicy,
    ) -> ImportResult<HeaderMapping>;

    /// 按列名（而非位置）将一行单元格写入新的 Article
    fn map_to_article(&self, mapping: &HeaderMapping, cells: Vec<Option<String>>) -> Article;
}

// ==========================================
// ConflictHandler Trait
// ==========================================
// 用途: 重名文档检测接口
// 实现者: ConflictHandler
pub trait ConflictHandler: Send + Sync {
    /// 检测输出路径重复的记录（不包括第一次出现）
    fn detect_duplicates(
        &self,
        records: &[Article],
        layout: OutputLayout,
    ) -> Vec<DuplicateDocument>;
}
