// ==========================================
// Notion 导出转换 - 文章记录
// ==========================================
// 职责: 定义一行 CSV 对应的 Article 结构体 + 列名到字段的静态映射
// 生命周期: 仅在一次转换流程内（解析 → 渲染）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Article - 文章记录
// ==========================================
// 字段与 Notion 导出 CSV 的表头一一对应，全部为文本
// 缺失/空单元格保持空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Article {
    pub category: String,
    pub about: String, // 同时作为输出文件名
    pub status: String,
    pub score: String, // 文本形式保留，不做数值解析
    pub link: String,
    pub author: String,
    pub publisher: String,
    pub summary: String,
    pub source: String,
}

impl Article {
    /// 按字段写入值
    pub fn set(&mut self, field: ArticleField, value: String) {
        *self.slot_mut(field) = value;
    }

    /// 按字段读取值
    pub fn get(&self, field: ArticleField) -> &str {
        match field {
            ArticleField::Category => &self.category,
            ArticleField::About => &self.about,
            ArticleField::Status => &self.status,
            ArticleField::Score => &self.score,
            ArticleField::Link => &self.link,
            ArticleField::Author => &self.author,
            ArticleField::Publisher => &self.publisher,
            ArticleField::Summary => &self.summary,
            ArticleField::Source => &self.source,
        }
    }

    fn slot_mut(&mut self, field: ArticleField) -> &mut String {
        match field {
            ArticleField::Category => &mut self.category,
            ArticleField::About => &mut self.about,
            ArticleField::Status => &mut self.status,
            ArticleField::Score => &mut self.score,
            ArticleField::Link => &mut self.link,
            ArticleField::Author => &mut self.author,
            ArticleField::Publisher => &mut self.publisher,
            ArticleField::Summary => &mut self.summary,
            ArticleField::Source => &mut self.source,
        }
    }
}

// ==========================================
// ArticleField - 表头列名
// ==========================================
// 列名区分大小写，需与表头（trim 后）完全一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleField {
    Category,
    About,
    Status,
    Score,
    Link,
    Author,
    Publisher,
    Summary,
    Source,
}

impl ArticleField {
    /// 全部字段（按标准表头顺序）
    pub const ALL: [ArticleField; 9] = [
        ArticleField::Category,
        ArticleField::About,
        ArticleField::Status,
        ArticleField::Score,
        ArticleField::Link,
        ArticleField::Author,
        ArticleField::Publisher,
        ArticleField::Summary,
        ArticleField::Source,
    ];

    /// 表头中的列名
    pub fn column_name(self) -> &'static str {
        match self {
            ArticleField::Category => "Category",
            ArticleField::About => "About",
            ArticleField::Status => "Status",
            ArticleField::Score => "Score",
            ArticleField::Link => "Link",
            ArticleField::Author => "Author",
            ArticleField::Publisher => "Publisher",
            ArticleField::Summary => "Summary",
            ArticleField::Source => "Source",
        }
    }

    /// 由列名查找字段，未知列名返回 None
    pub fn from_column_name(name: &str) -> Option<ArticleField> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.column_name() == name)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.column_name())
    }
}
