// ==========================================
// Notion 导出转换 - 核心库
// ==========================================
// 功能: Notion 表格导出的 CSV → 每行一篇 Markdown 文档
// 流程: 读取 CSV → 表头绑定 → 字段清洗 → 模板渲染 → 写入目录树
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与策略类型
pub mod domain;

// 导入层 - CSV 解析与字段绑定
pub mod importer;

// 渲染层 - 模板与文件写入
pub mod renderer;

// 配置层 - 转换参数
pub mod config;

// 应用层 - 参数检查与流程编排
pub mod app;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use app::{ConvertError, ConvertResult, Converter};
pub use config::ConvertConfig;
pub use domain::{
    Article, ArticleField, ConvertSummary, DuplicatePolicy, OutputLayout, UnknownFieldPolicy,
};
pub use importer::{ImportError, LoadedTable, TableLoader};
pub use renderer::{ArticleTemplate, DocumentRenderer, MarkdownWriter, RenderError};

// ==========================================
// 常量定义
// ==========================================

// 版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 名称
pub const APP_NAME: &str = "notion2md";
