// ==========================================
// Notion 导出转换 - 应用层
// ==========================================
// 职责: 参数检查、流程编排、失败清理
// ==========================================

pub mod converter;
pub mod error;
pub mod precheck;

pub use converter::Converter;
pub use error::{ConvertError, ConvertResult};
pub use precheck::check_params;
