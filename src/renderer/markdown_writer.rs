// ==========================================
// Notion 导出转换 - Markdown 文档写入器
// ==========================================
// 职责: 单条记录 → 单个 Markdown 文件
// 副作用: 按需创建目标目录（幂等），写入/覆盖一个文件
// 红线: 不删除任何文件，失败清理由调用方负责
// ==========================================

use crate::domain::{Article, OutputLayout};
use crate::renderer::error::{RenderError, RenderResult};
use crate::renderer::path_resolver;
use crate::renderer::template::ArticleTemplate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// ==========================================
// DocumentRenderer Trait
// ==========================================
// 实现者: MarkdownWriter
pub trait DocumentRenderer: Send + Sync {
    /// 渲染并写入一篇文档
    ///
    /// # 返回
    /// - Ok(PathBuf): 写入的文件路径
    /// - Err(TemplateRenderError / OutputWriteError)
    fn render(
        &self,
        article: &Article,
        output_root: &Path,
        layout: OutputLayout,
    ) -> RenderResult<PathBuf>;

    /// 按顺序渲染全部记录，遇到第一个错误立即返回
    fn render_all(
        &self,
        articles: &[Article],
        output_root: &Path,
        layout: OutputLayout,
    ) -> RenderResult<Vec<PathBuf>> {
        articles
            .iter()
            .map(|article| self.render(article, output_root, layout))
            .collect()
    }
}

pub struct MarkdownWriter {
    template: ArticleTemplate,
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new(ArticleTemplate::new())
    }
}

impl MarkdownWriter {
    pub fn new(template: ArticleTemplate) -> Self {
        Self { template }
    }
}

impl DocumentRenderer for MarkdownWriter {
    fn render(
        &self,
        article: &Article,
        output_root: &Path,
        layout: OutputLayout,
    ) -> RenderResult<PathBuf> {
        let dir = path_resolver::destination_dir(output_root, article, layout);
        fs::create_dir_all(&dir).map_err(|source| RenderError::OutputWriteError {
            path: dir.clone(),
            source,
        })?;

        let path = path_resolver::document_path(output_root, article, layout);
        let content = self.template.render(article)?;

        fs::write(&path, content).map_err(|source| RenderError::OutputWriteError {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "文档写入完成");

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn article(category: &str, about: &str) -> Article {
        Article {
            category: category.to_string(),
            about: about.to_string(),
            summary: format!("summary of {}", about),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_flat() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("result");

        let path = MarkdownWriter::default()
            .render(&article("tech", "rust"), &root, OutputLayout::Flat)
            .unwrap();

        assert_eq!(path, root.join("rust.md"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("title: 'rust'"));
        assert!(content.contains("summary of rust"));
    }

    #[test]
    fn test_render_by_category_creates_missing_parents() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("a").join("b");

        let path = MarkdownWriter::default()
            .render(&article("tech", "rust"), &root, OutputLayout::ByCategory)
            .unwrap();

        assert_eq!(path, root.join("tech").join("rust.md"));
        assert!(path.is_file());
    }

    #[test]
    fn test_render_same_category_twice() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MarkdownWriter::default();

        writer
            .render(&article("tech", "rust"), temp_dir.path(), OutputLayout::ByCategory)
            .unwrap();
        // 目录已存在，不应失败
        writer
            .render(&article("tech", "golang"), temp_dir.path(), OutputLayout::ByCategory)
            .unwrap();

        assert!(temp_dir.path().join("tech/rust.md").is_file());
        assert!(temp_dir.path().join("tech/golang.md").is_file());
    }

    #[test]
    fn test_render_overwrites_same_about() {
        let temp_dir = TempDir::new().unwrap();
        let writer = MarkdownWriter::default();

        let mut first = article("tech", "rust");
        first.summary = "first".to_string();
        let mut second = article("tech", "rust");
        second.summary = "second".to_string();

        writer.render(&first, temp_dir.path(), OutputLayout::Flat).unwrap();
        let path = writer.render(&second, temp_dir.path(), OutputLayout::Flat).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("second"));
        assert!(!content.contains("first"));
    }

    #[test]
    fn test_render_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // 输出根路径是一个普通文件，无法创建目录
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let result = MarkdownWriter::default().render(
            &article("tech", "rust"),
            &blocker,
            OutputLayout::ByCategory,
        );

        assert!(matches!(result, Err(RenderError::OutputWriteError { .. })));
    }

    #[test]
    fn test_render_all_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let articles = vec![article("tech", "a"), article("life", "b")];

        let paths = MarkdownWriter::default()
            .render_all(&articles, temp_dir.path(), OutputLayout::ByCategory)
            .unwrap();

        assert_eq!(
            paths,
            vec![
                temp_dir.path().join("tech").join("a.md"),
                temp_dir.path().join("life").join("b.md"),
            ]
        );
    }
}
