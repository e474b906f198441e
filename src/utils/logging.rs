/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::config::Config;
use crate::models::FailureKind;
use crate::presentation::ReportViewModel;

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 程序启动 - 相似度检测客户端 ({})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 分析服务: {}", config.analysis_url());
    info!("⏱️ 请求超时: {} 秒", config.request_timeout_secs);
    info!("{}", "=".repeat(60));
}

/// 记录报告摘要
///
/// # 参数
/// - `model`: 已渲染的视图模型
pub fn log_report_summary(model: &ReportViewModel) {
    match model {
        ReportViewModel::Report(report) => {
            info!(
                "📊 相似度 {} → {:?} ({})",
                report.score_label,
                report.band,
                report.severity.label()
            );
        }
        ReportViewModel::Error(banner) => match banner.kind {
            FailureKind::Service => warn!("❌ 分析服务返回错误: {}", banner.message),
            FailureKind::Transport => warn!("🚨 请求失败: {}", banner.message),
        },
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
