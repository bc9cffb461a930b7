// ==========================================
// Notion 导出转换 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 规则: 逗号分隔 / 标准 CSV 引号 / '#' 开头整行为注释
// 引号严格校验: 引号只能开启字段，字段内仅允许 "" 转义，
//               闭合引号后只能是分隔符、换行或文件结束
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::FileParser;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;
use tracing::debug;

/// 注释行起始字符
pub const COMMENT_CHAR: u8 = b'#';

/// 字段分隔符
pub const DELIMITER: u8 = b',';

/// 引号字符
const QUOTE: u8 = b'"';

/// UTF-8 BOM
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

// ==========================================
// RawRow / RawTable - 解析中间产物
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: u64, // 源文件行号（用于诊断）
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub header: Vec<String>, // 未清洗的表头
    pub rows: Vec<RawRow>,
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable> {
        // 整个文件一次性读入内存
        let data = fs::read(file_path).map_err(|source| ImportError::InputUnreadable {
            path: file_path.to_path_buf(),
            source,
        })?;
        debug!(path = %file_path.display(), bytes = data.len(), "CSV 文件读取完成");

        self.parse_bytes(&data)
    }
}

impl CsvParser {
    /// 解析内存中的 CSV 内容
    pub fn parse_bytes(&self, data: &[u8]) -> ImportResult<RawTable> {
        // csv 读取器对引号宽松，先做一次结构校验
        check_quote_structure(data)?;

        let mut reader = ReaderBuilder::new()
            .has_headers(false) // 表头由本层自行切分
            .delimiter(DELIMITER)
            .comment(Some(COMMENT_CHAR))
            .flexible(false) // 行长度不一致视为结构错误
            .from_reader(data);

        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            // 非法 UTF-8 按替换字符处理，不中断导入
            let cells = record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect();
            rows.push(RawRow { line, cells });
        }

        let mut rows = rows.into_iter();
        let header = rows
            .next()
            .ok_or_else(|| ImportError::EmptyTable("缺少表头行".to_string()))?;

        let rows: Vec<RawRow> = rows.collect();
        if rows.is_empty() {
            return Err(ImportError::EmptyTable("只有表头，没有数据行".to_string()));
        }

        Ok(RawTable {
            header: header.cells,
            rows,
        })
    }
}

/// 校验引号结构，违规时返回 MalformedTable（行号从 1 开始）
fn check_quote_structure(data: &[u8]) -> ImportResult<()> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut line: u64 = 1;
    let mut quote_line: u64 = 1; // 当前引号字段的起始行
    let mut in_quotes = false;
    let mut after_closing_quote = false;
    let mut in_comment = false;
    let mut at_record_start = true;
    let mut at_field_start = true;

    let malformed = |line: u64, message: &str| ImportError::MalformedTable {
        line,
        message: message.to_string(),
    };

    let mut bytes = data.iter().copied().peekable();
    while let Some(b) = bytes.next() {
        if in_comment {
            if b == b'\n' {
                in_comment = false;
                line += 1;
            }
            continue;
        }

        if in_quotes {
            match b {
                QUOTE if bytes.peek() == Some(&QUOTE) => {
                    bytes.next();
                }
                QUOTE => {
                    in_quotes = false;
                    after_closing_quote = true;
                }
                b'\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match b {
            DELIMITER => {
                at_field_start = true;
                at_record_start = false;
                after_closing_quote = false;
            }
            b'\n' | b'\r' => {
                if b == b'\n' {
                    line += 1;
                }
                at_field_start = true;
                at_record_start = true;
                after_closing_quote = false;
            }
            _ if after_closing_quote => {
                return Err(malformed(line, "引号字段闭合后出现多余字符"));
            }
            COMMENT_CHAR if at_record_start => in_comment = true,
            QUOTE if at_field_start => {
                in_quotes = true;
                quote_line = line;
                at_field_start = false;
                at_record_start = false;
            }
            QUOTE => {
                return Err(malformed(line, "未加引号的字段中出现裸引号"));
            }
            _ => {
                at_field_start = false;
                at_record_start = false;
            }
        }
    }

    if in_quotes {
        return Err(malformed(quote_line, "引号字段未闭合"));
    }
    Ok(())
}
