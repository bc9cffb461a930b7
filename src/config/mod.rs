// ==========================================
// Notion 导出转换 - 配置层
// ==========================================
// 来源: 命令行参数（clap）+ RUST_LOG
// ==========================================

pub mod convert_config;

// 重导出核心配置
pub use convert_config::{ConvertConfig, DEFAULT_OUTPUT_DIR};
