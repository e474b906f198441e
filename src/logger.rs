//! 日志初始化
//!
//! 默认级别 info，`RUST_LOG` 可以覆盖；日志统一输出到 stderr，
//! stdout 只留给报告。

use tracing_subscriber::EnvFilter;

/// 初始化日志（重复调用无副作用）
pub fn init() {
    init_with_level("info");
}

/// 按配置决定默认级别
pub fn init_verbose(verbose: bool) {
    init_with_level(if verbose { "debug" } else { "info" });
}

fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
