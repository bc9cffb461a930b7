// ==========================================
// Notion 导出转换 - 领域类型定义
// ==========================================
// 职责: 输出布局与各类冲突策略
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 输出布局 (Output Layout)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutputLayout {
    #[default]
    Flat,       // 全部文档直接写入输出根目录
    ByCategory, // 按 Category 建子目录
}

impl OutputLayout {
    /// 由 --flat 开关换算
    pub fn from_flat(flat: bool) -> Self {
        if flat {
            OutputLayout::Flat
        } else {
            OutputLayout::ByCategory
        }
    }

    pub fn is_flat(self) -> bool {
        self == OutputLayout::Flat
    }
}

impl fmt::Display for OutputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLayout::Flat => write!(f, "FLAT"),
            OutputLayout::ByCategory => write!(f, "BY_CATEGORY"),
        }
    }
}

// ==========================================
// 未知列策略 (Unknown Field Policy)
// ==========================================
// Skip: 记录 warn 日志后丢弃整列
// Reject: 表头绑定阶段直接失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnknownFieldPolicy {
    #[default]
    Skip,
    Reject,
}

impl fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownFieldPolicy::Skip => write!(f, "SKIP"),
            UnknownFieldPolicy::Reject => write!(f, "REJECT"),
        }
    }
}

// ==========================================
// 重名文档策略 (Duplicate Policy)
// ==========================================
// 同一输出路径出现多次时:
// Overwrite: 后写覆盖先写（记录 warn 日志）
// Reject: 渲染前失败，不写任何文件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicatePolicy {
    #[default]
    Overwrite,
    Reject,
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicatePolicy::Overwrite => write!(f, "overwrite"),
            DuplicatePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "reject" => Ok(DuplicatePolicy::Reject),
            other => Err(format!("未知的重名策略: {} (可选: overwrite, reject)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_from_flat() {
        assert_eq!(OutputLayout::from_flat(true), OutputLayout::Flat);
        assert_eq!(OutputLayout::from_flat(false), OutputLayout::ByCategory);
        assert!(OutputLayout::Flat.is_flat());
        assert!(!OutputLayout::ByCategory.is_flat());
    }

    #[test]
    fn test_duplicate_policy_from_str() {
        assert_eq!("overwrite".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Overwrite));
        assert_eq!(" Reject ".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Reject));
        assert!("error".parse::<DuplicatePolicy>().is_err());
        assert!("merge".parse::<DuplicatePolicy>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(OutputLayout::default(), OutputLayout::Flat);
        assert_eq!(UnknownFieldPolicy::default(), UnknownFieldPolicy::Skip);
        assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Overwrite);
    }
}
