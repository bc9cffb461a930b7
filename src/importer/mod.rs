// ==========================================
// Notion 导出转换 - 导入层
// ==========================================
// 职责: CSV 文件 → Article 列表
// 支持: CSV（逗号分隔，'#' 注释行）
// ==========================================

// 模块声明
pub mod conflict_handler;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod table_loader;

// 重导出核心类型
pub use conflict_handler::{ConflictHandler as ConflictHandlerImpl, DuplicateDocument};
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::{FieldMapper as FieldMapperImpl, HeaderMapping};
pub use file_parser::{CsvParser, RawRow, RawTable};
pub use table_loader::{LoadedTable, TableLoader};

// 重导出 Trait 接口
pub use importer_trait::{ConflictHandler, DataCleaner, FieldMapper, FileParser};
