// ==========================================
// Notion 导出转换 - 输出路径推导
// ==========================================
// 平铺:   <root>/<About>.md
// 分类:   <root>/<Category>/<About>.md
// 说明: Category / About 原样作为路径段，不做清洗
// ==========================================

use crate::domain::{Article, OutputLayout};
use crate::renderer::template::DOCUMENT_EXTENSION;
use std::path::{Path, PathBuf};

/// 文档所在目录
pub fn destination_dir(output_root: &Path, article: &Article, layout: OutputLayout) -> PathBuf {
    match layout {
        OutputLayout::Flat => output_root.to_path_buf(),
        OutputLayout::ByCategory => output_root.join(&article.category),
    }
}

/// 文档文件名
pub fn document_file_name(article: &Article) -> String {
    format!("{}.{}", article.about, DOCUMENT_EXTENSION)
}

/// 相对输出根目录的文档路径（用于重名检测）
pub fn relative_document_path(article: &Article, layout: OutputLayout) -> PathBuf {
    destination_dir(Path::new(""), article, layout).join(document_file_name(article))
}

/// 文档完整路径
pub fn document_path(output_root: &Path, article: &Article, layout: OutputLayout) -> PathBuf {
    destination_dir(output_root, article, layout).join(document_file_name(article))
}
