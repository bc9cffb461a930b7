// ==========================================
// TableLoader 集成测试
// ==========================================
// 测试目标: 验证 CSV 文件 → Article 列表（不产生任何写入）
// ==========================================

mod test_helpers;

use notion2md::importer::{CsvParser, DataCleanerImpl, FieldMapperImpl};
use notion2md::{logging, Article, ImportError, TableLoader, UnknownFieldPolicy};
use test_helpers::{create_csv, FIXTURE_CSV, SAMPLE_ROW, STANDARD_HEADER};

/// 创建测试用的 TableLoader 实例
fn create_test_loader(policy: UnknownFieldPolicy) -> TableLoader {
    TableLoader::new(
        Box::new(CsvParser),
        Box::new(DataCleanerImpl),
        Box::new(FieldMapperImpl),
        policy,
    )
}

#[test]
fn test_load_fixture() {
    logging::init_test();

    let table = create_test_loader(UnknownFieldPolicy::Reject)
        .load(FIXTURE_CSV)
        .expect("fixture should load");

    // BOM 已去除
    assert_eq!(table.header[0], "Category");
    assert_eq!(table.header.len(), 9);
    // 注释行被跳过
    assert_eq!(table.records.len(), 3);
    assert_eq!(table.records[0].about, "golang-concurrency");
    assert_eq!(table.records[1].source, "chapter one\nchapter two");
    assert_eq!(table.records[2].summary, "O\"Reilly\"s guide");
    assert_eq!(table.records[2].score, "");
}

#[test]
fn test_load_sample_row() {
    logging::init_test();

    let input = create_csv(&format!("{}\n{}\n", STANDARD_HEADER, SAMPLE_ROW)).unwrap();

    let table = create_test_loader(UnknownFieldPolicy::Reject)
        .load(input.path())
        .unwrap();

    assert_eq!(
        table.records,
        vec![Article {
            category: "tech".to_string(),
            about: "golang-concurrency".to_string(),
            status: "read".to_string(),
            score: "9".to_string(),
            link: "http://example.com".to_string(),
            author: "jane".to_string(),
            publisher: "acme".to_string(),
            summary: "concurrency is great".to_string(),
            source: "deep dive text".to_string(),
        }]
    );
}

#[test]
fn test_load_header_subset_in_any_order() {
    logging::init_test();

    let input = create_csv("Score, About ,Category\n7,rust,tech\n").unwrap();

    let table = create_test_loader(UnknownFieldPolicy::Reject)
        .load(input.path())
        .unwrap();

    let article = &table.records[0];
    assert_eq!(article.score, "7");
    assert_eq!(article.about, "rust");
    assert_eq!(article.category, "tech");
    assert_eq!(article.link, "");
}

#[test]
fn test_load_missing_file() {
    logging::init_test();

    let result = create_test_loader(UnknownFieldPolicy::Skip).load("tests/fixtures/missing.csv");

    assert!(matches!(result, Err(ImportError::InputUnreadable { .. })));
}

#[test]
fn test_load_comment_only_file() {
    logging::init_test();

    let input = create_csv("# nothing here\n# still nothing\n").unwrap();

    let result = create_test_loader(UnknownFieldPolicy::Skip).load(input.path());

    assert!(matches!(result, Err(ImportError::EmptyTable(_))));
}
