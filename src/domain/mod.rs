// ==========================================
// Notion 导出转换 - 领域模型层
// ==========================================
// 职责: 定义文章记录、字段映射表、输出与冲突策略
// 红线: 不含文件读写逻辑
// ==========================================

pub mod article;
pub mod report;
pub mod types;

// 重导出核心类型
pub use article::{Article, ArticleField};
pub use report::ConvertSummary;
pub use types::{DuplicatePolicy, OutputLayout, UnknownFieldPolicy};
