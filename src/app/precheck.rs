// ==========================================
// Notion 导出转换 - 参数检查
// ==========================================
// 在任何解析开始前执行，失败时不创建任何文件
// ==========================================

use crate::app::error::{ConvertError, ConvertResult};
use crate::config::ConvertConfig;
use crate::importer::ImportError;
use std::fs;
use std::io::ErrorKind;

/// 检查输入文件与输出目录
///
/// # 规则
/// - input 非空、存在、不是目录
/// - output 非空、尚不存在
pub fn check_params(config: &ConvertConfig) -> ConvertResult<()> {
    // 检查 csv 选项
    if config.input.as_os_str().is_empty() {
        return Err(ConvertError::InvalidArgument("--csv 不能为空".to_string()));
    }

    let meta = fs::symlink_metadata(&config.input).map_err(|source| {
        ConvertError::Import(ImportError::InputUnreadable {
            path: config.input.clone(),
            source,
        })
    })?;
    if meta.is_dir() {
        return Err(ConvertError::InvalidArgument(format!(
            "不是有效的 CSV 文件: {}",
            config.input.display()
        )));
    }

    // 检查 out 选项
    if config.output.as_os_str().is_empty() {
        return Err(ConvertError::InvalidArgument("--out 不能为空".to_string()));
    }

    match fs::symlink_metadata(&config.output) {
        Ok(_) => Err(ConvertError::OutputExists(config.output.clone())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(ConvertError::OutputInaccessible {
            path: config.output.clone(),
            source,
        }),
    }
}
