// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 支持环境变量配置日志级别
// 日志写入 stderr，stdout 只输出转换结果
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 默认日志级别
pub const DEFAULT_LEVEL: &str = "info";

/// 静默模式日志级别（仅保留告警与错误）
pub const QUIET_LEVEL: &str = "warn";

/// 初始化日志系统
///
/// # 参数
/// - default_level: 未设置 RUST_LOG 时使用的级别
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器，优先于 default_level
///   例如: RUST_LOG=debug 或 RUST_LOG=notion2md=trace
///
/// # 示例
/// ```no_run
/// use notion2md::logging;
/// logging::init(logging::DEFAULT_LEVEL);
/// ```
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 配置日志格式
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
