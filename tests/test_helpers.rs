// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的临时 CSV、输出目录等
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempDir};

/// 标准表头（与 Article 字段顺序一致）
pub const STANDARD_HEADER: &str = "Category,About,Status,Score,Link,Author,Publisher,Summary,Source";

/// 示例数据行
pub const SAMPLE_ROW: &str =
    "tech,golang-concurrency,read,9,http://example.com,jane,acme,concurrency is great,deep dive text";

/// 固定测试数据文件
pub const FIXTURE_CSV: &str = "tests/fixtures/notion_export.csv";

/// 创建临时 CSV 文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn create_csv(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;
    Ok(temp_file)
}

/// 创建临时工作目录，并返回其中一个尚不存在的输出路径
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 输出根目录路径（未创建）
pub fn create_output_root() -> Result<(TempDir, PathBuf), Box<dyn Error>> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("result");
    Ok((temp_dir, output))
}

/// 递归统计目录下的文件数
pub fn count_files(root: &Path) -> usize {
    let Ok(entries) = fs::read_dir(root) else {
        return 0;
    };
    entries
        .filter_map(Result::ok)
        .map(|entry| {
            let path = entry.path();
            if path.is_dir() {
                count_files(&path)
            } else {
                1
            }
        })
        .sum()
}
