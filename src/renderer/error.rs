// ==========================================
// Notion 导出转换 - 渲染模块错误类型
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 渲染模块错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("模板渲染失败 (About: {about}): {message}")]
    TemplateRenderError { about: String, message: String },

    #[error("文档写入失败 ({path}): {source}")]
    OutputWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type RenderResult<T> = Result<T, RenderError>;
