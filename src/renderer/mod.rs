// ==========================================
// Notion 导出转换 - 渲染层
// ==========================================
// 职责: Article → Markdown 文件
// ==========================================

pub mod error;
pub mod markdown_writer;
pub mod path_resolver;
pub mod template;

// 重导出核心类型
pub use error::{RenderError, RenderResult};
pub use markdown_writer::{DocumentRenderer, MarkdownWriter};
pub use template::{ArticleTemplate, DOCUMENT_EXTENSION};
