//! 终端文本渲染
//!
//! 报告输出到 stdout，日志走 stderr，两者互不干扰

use super::presenter::{ErrorBanner, PanelSide, Report, ReportViewModel};
use super::view_state::ReportViewState;
use crate::models::FailureKind;

const FILLED: char = '█';
const EMPTY: char = '░';

/// 渲染整个报告
pub fn render_text(model: &ReportViewModel, state: &ReportViewState, bar_width: usize) -> String {
    match model {
        ReportViewModel::Error(banner) => render_error(banner),
        ReportViewModel::Report(report) => render_report(report, state, bar_width),
    }
}

/// 错误横幅
pub fn render_error(banner: &ErrorBanner) -> String {
    match banner.kind {
        FailureKind::Service => format!("❌ Error: {}\n", banner.message),
        FailureKind::Transport => format!("🚨 Request failed: {}\n", banner.message),
    }
}

/// 进度条
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width * 3 + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(width - filled));
    bar.push(']');
    bar
}

fn render_report(report: &Report, state: &ReportViewState, bar_width: usize) -> String {
    let mut lines = vec![
        "Similarity Score".to_string(),
        format!(
            "{} {} ({})",
            progress_bar(report.progress_percent, bar_width),
            report.score_label,
            report.severity.label()
        ),
        String::new(),
        "Interpretation".to_string(),
        format!("[{}] {}", report.severity.label(), report.interpretation),
        "─".repeat(bar_width.max(10)),
    ];

    for side in [PanelSide::User, PanelSide::Reference] {
        let panel = report.panel(side);
        lines.push(panel.title.to_string());
        lines.push(format!("  Total Tokens:  {}", panel.total_tokens));
        lines.push(format!("  Unique Tokens: {}", panel.unique_tokens));
        lines.push(format!("  Keyword Count: {}", panel.keyword_count));
        lines.push(format!("  [{}]", state.button_label(side)));
        if state.is_visible(side) {
            lines.push(format!("  {}", panel.tokens));
        }
        lines.push(String::new());
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
