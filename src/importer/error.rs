// ==========================================
// Notion 导出转换 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("CSV 文件读取失败 ({path}): {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV 解析失败 (行 {line}): {message}")]
    MalformedTable { line: u64, message: String },

    #[error("CSV 内容为空: {0}")]
    EmptyTable(String),

    // ===== 数据映射错误 =====
    #[error("未知的表头字段 (第 {column} 列): {name}")]
    UnknownField { column: usize, name: String },
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        ImportError::MalformedTable {
            line,
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message_names_header() {
        let err = ImportError::UnknownField {
            column: 3,
            name: "Tags".to_string(),
        };
        assert!(err.to_string().contains("Tags"));
    }

    #[test]
    fn test_input_unreadable_keeps_source() {
        use std::error::Error as _;

        let err = ImportError::InputUnreadable {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.csv"));
        assert!(err.source().is_some());
    }
}
