// ==========================================
// Notion 导出转换 - 转换配置
// ==========================================
// 职责: 一次转换所需的全部参数（由命令行构造）
// 红线: 只承载参数，不做文件系统检查（见 app::precheck）
// ==========================================

use crate::domain::{DuplicatePolicy, OutputLayout, UnknownFieldPolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认输出目录
pub const DEFAULT_OUTPUT_DIR: &str = "out";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub input: PathBuf,  // CSV 文件路径
    pub output: PathBuf, // 输出根目录（必须尚不存在）
    #[serde(default)]
    pub layout: OutputLayout,
    #[serde(default)]
    pub unknown_field_policy: UnknownFieldPolicy,
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            layout: OutputLayout::default(),
            unknown_field_policy: UnknownFieldPolicy::default(),
            duplicate_policy: DuplicatePolicy::default(),
        }
    }

    pub fn with_layout(mut self, layout: OutputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_unknown_field_policy(mut self, policy: UnknownFieldPolicy) -> Self {
        self.unknown_field_policy = policy;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}
