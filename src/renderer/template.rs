// ==========================================
// Notion 导出转换 - 文档模板
// ==========================================
// 格式: YAML front matter + Markdown 正文
// 规则: 字段值原样插入，不做 YAML/HTML 转义
// ==========================================

use crate::domain::Article;
use crate::renderer::error::{RenderError, RenderResult};
use std::fmt::Write;

/// 输出文档扩展名
pub const DOCUMENT_EXTENSION: &str = "md";

/// 固定模板，构造一次后显式传给 MarkdownWriter
#[derive(Debug, Clone, Copy, Default)]
pub struct ArticleTemplate;

impl ArticleTemplate {
    pub fn new() -> Self {
        ArticleTemplate
    }

    /// 渲染单篇文档
    pub fn render(&self, article: &Article) -> RenderResult<String> {
        let mut buf = String::with_capacity(
            256 + article.summary.len() + article.source.len() + article.link.len() * 2,
        );
        self.write_document(&mut buf, article)
            .map_err(|e| RenderError::TemplateRenderError {
                about: article.about.clone(),
                message: e.to_string(),
            })?;
        Ok(buf)
    }

    fn write_document(&self, buf: &mut String, a: &Article) -> std::fmt::Result {
        writeln!(buf, "---")?;
        writeln!(buf, "title: '{}'", a.about)?;
        writeln!(buf, "score: '{}'", a.score)?;
        writeln!(buf, "tags: ['{}']", a.category)?;
        writeln!(buf, "author: '{}'", a.author)?;
        writeln!(buf, "publisher: '{}'", a.publisher)?;
        writeln!(buf, "status: '{}'", a.status)?;
        writeln!(buf, "link: '{}'", a.link)?;
        writeln!(buf, "---")?;
        writeln!(buf)?;
        writeln!(buf, "# Let's Summarize")?;
        writeln!(buf)?;
        writeln!(buf, "{}", a.summary)?;
        writeln!(buf)?;
        writeln!(buf, "# Source Analysis")?;
        writeln!(buf)?;
        writeln!(buf, "{}", a.source)?;
        writeln!(buf)?;
        writeln!(buf, "# References")?;
        writeln!(buf, "1. {}", a.link)
    }
}
