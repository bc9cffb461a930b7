// ==========================================
// Notion 导出转换 - 转换流程错误类型
// ==========================================
// 每个变体的 Display 都标明失败阶段
// ==========================================

use crate::importer::ImportError;
use crate::renderer::RenderError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    // ===== 参数检查 =====
    #[error("参数错误: {0}")]
    InvalidArgument(String),

    #[error("参数错误: 输出目录已存在: {0}")]
    OutputExists(PathBuf),

    #[error("参数错误: 无法检查输出目录 ({path}): {source}")]
    OutputInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ===== 导入阶段 =====
    #[error("读取阶段失败: {0}")]
    Import(#[from] ImportError),

    // ===== 冲突检测 =====
    #[error("冲突检测失败: 存在 {count} 个重名文档 (首个: 第 {row_number} 行 {path})")]
    DuplicateDocument {
        count: usize,
        row_number: usize,
        path: PathBuf,
    },

    // ===== 渲染阶段 =====
    #[error("渲染阶段失败: {0}")]
    Render(#[from] RenderError),
}

/// Result 类型别名
pub type ConvertResult<T> = Result<T, ConvertError>;
