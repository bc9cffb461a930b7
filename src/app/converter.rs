// ==========================================
// Notion 导出转换 - 转换流程编排
// ==========================================
// 流程: 参数检查 → 加载 CSV → 重名检测 → 逐条渲染
// 失败: 删除已部分写入的输出根目录，返回原始错误
// ==========================================

use crate::app::error::{ConvertError, ConvertResult};
use crate::app::precheck;
use crate::config::ConvertConfig;
use crate::domain::{ConvertSummary, DuplicatePolicy};
use crate::importer::{ConflictHandler, ConflictHandlerImpl, TableLoader};
use crate::renderer::{DocumentRenderer, MarkdownWriter};
use chrono::Utc;
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info, instrument, warn, Span};
use uuid::Uuid;

// ==========================================
// Converter - 转换器
// ==========================================
pub struct Converter {
    config: ConvertConfig,

    // 流程组件
    table_loader: TableLoader,
    conflict_handler: Box<dyn ConflictHandler>,
    renderer: Box<dyn DocumentRenderer>,
}

impl Converter {
    /// 使用默认组件创建转换器
    pub fn new(config: ConvertConfig) -> Self {
        let table_loader = TableLoader::with_policy(config.unknown_field_policy);
        Self::with_components(
            config,
            table_loader,
            Box::new(ConflictHandlerImpl),
            Box::new(MarkdownWriter::default()),
        )
    }

    /// 注入自定义组件
    pub fn with_components(
        config: ConvertConfig,
        table_loader: TableLoader,
        conflict_handler: Box<dyn ConflictHandler>,
        renderer: Box<dyn DocumentRenderer>,
    ) -> Self {
        Self {
            config,
            table_loader,
            conflict_handler,
            renderer,
        }
    }

    /// 执行一次完整转换
    ///
    /// # 返回
    /// - Ok(ConvertSummary): 全部文档写入成功
    /// - Err(ConvertError): 任一阶段失败，输出根目录已被清理
    #[instrument(skip(self), fields(batch_id))]
    pub fn run(&self) -> ConvertResult<ConvertSummary> {
        // 参数检查失败时输出目录尚未创建，也不能删除（可能是已存在的目录）
        precheck::check_params(&self.config)?;

        let batch_id = Uuid::new_v4().to_string();
        Span::current().record("batch_id", batch_id.as_str());
        info!(
            input = %self.config.input.display(),
            output = %self.config.output.display(),
            layout = %self.config.layout,
            "开始转换"
        );

        match self.convert(batch_id) {
            Ok(summary) => {
                info!(
                    files_written = summary.files_written,
                    elapsed_ms = summary.elapsed_ms,
                    "转换完成"
                );
                Ok(summary)
            }
            Err(e) => {
                error!(error = %e, "转换失败，清理输出目录");
                cleanup_output(&self.config.output);
                Err(e)
            }
        }
    }

    fn convert(&self, batch_id: String) -> ConvertResult<ConvertSummary> {
        let start_time = Instant::now();
        let started_at = Utc::now();
        let config = &self.config;

        // === 步骤 1: 加载 CSV ===
        let table = self.table_loader.load(&config.input)?;

        // === 步骤 2: 重名检测 ===
        let duplicates = self
            .conflict_handler
            .detect_duplicates(&table.records, config.layout);
        if let Some(first) = duplicates.first() {
            match config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(ConvertError::DuplicateDocument {
                        count: duplicates.len(),
                        row_number: first.row_number,
                        path: first.relative_path.clone(),
                    });
                }
                DuplicatePolicy::Overwrite => {
                    for dup in &duplicates {
                        warn!(
                            row_number = dup.row_number,
                            first_row_number = dup.first_row_number,
                            path = %dup.relative_path.display(),
                            "重名文档，将覆盖先前写入的文件"
                        );
                    }
                }
            }
        }

        // === 步骤 3: 逐条渲染 ===
        let written: HashSet<PathBuf> = self
            .renderer
            .render_all(&table.records, &config.output, config.layout)?
            .into_iter()
            .collect();

        Ok(ConvertSummary {
            batch_id,
            started_at,
            input: config.input.clone(),
            output: config.output.clone(),
            layout: config.layout,
            total_records: table.records.len(),
            files_written: written.len(),
            overwritten: duplicates.len(),
            skipped_columns: table.skipped_columns,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}

/// 删除输出根目录（不存在时忽略）
fn cleanup_output(output: &Path) {
    match fs::remove_dir_all(output) {
        Ok(()) => info!(path = %output.display(), "已删除部分写入的输出目录"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => error!(path = %output.display(), error = %e, "输出目录清理失败"),
    }
}
