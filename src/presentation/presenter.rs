//! 结果展示模型
//!
//! `present` 是纯映射，不做 I/O：把分析结果转成可渲染的报告模型。

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::models::{AnalysisReport, AnalysisResult, FailureKind, Stats};

/// 分数区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// score < 20
    Low,
    /// 20 <= score < 50
    Medium,
    /// score >= 50
    High,
}

impl ScoreBand {
    pub const MEDIUM_THRESHOLD: f64 = 20.0;
    pub const HIGH_THRESHOLD: f64 = 50.0;

    pub fn classify(score: f64) -> Self {
        if score < Self::MEDIUM_THRESHOLD {
            ScoreBand::Low
        } else if score < Self::HIGH_THRESHOLD {
            ScoreBand::Medium
        } else {
            ScoreBand::High
        }
    }

    /// 进度条和解读徽章共用同一个严重程度
    pub fn severity(self) -> Severity {
        match self {
            ScoreBand::Low => Severity::Success,
            ScoreBand::Medium => Severity::Warning,
            ScoreBand::High => Severity::Danger,
        }
    }
}

/// 视觉严重程度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Danger,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

/// 统计面板属于哪一侧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelSide {
    User,
    Reference,
}

impl PanelSide {
    pub fn title(self) -> &'static str {
        match self {
            PanelSide::User => "User Text",
            PanelSide::Reference => "Reference Text",
        }
    }
}

/// 单侧统计面板
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsPanel {
    pub side: PanelSide,
    pub title: &'static str,
    pub total_tokens: u64,
    pub unique_tokens: u64,
    pub keyword_count: u64,
    /// 用 ", " 拼接后的词元列表
    pub tokens: String,
}

impl StatsPanel {
    fn new(side: PanelSide, stats: &Stats, tokens: &[String]) -> Self {
        Self {
            side,
            title: side.title(),
            total_tokens: stats.total_tokens,
            unique_tokens: stats.unique_tokens,
            keyword_count: stats.keyword_count,
            tokens: tokens.join(", "),
        }
    }
}

/// 成功时的报告
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// 服务返回的原始分数文字
    pub score_label: String,
    pub score: f64,
    pub band: ScoreBand,
    pub severity: Severity,
    /// 进度条填充比例（0..=100）
    pub progress_percent: f64,
    pub interpretation: String,
    pub user: StatsPanel,
    pub reference: StatsPanel,
}

impl Report {
    pub fn panel(&self, side: PanelSide) -> &StatsPanel {
        match side {
            PanelSide::User => &self.user,
            PanelSide::Reference => &self.reference,
        }
    }
}

/// 失败时的错误横幅
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBanner {
    pub kind: FailureKind,
    pub message: String,
}

/// 报告视图模型
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ReportViewModel {
    Error(ErrorBanner),
    Report(Report),
}

fn leading_number() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("score pattern is valid")
    })
}

/// 解析分数文字中的数值
///
/// 去掉第一个 `%` 后取开头的数字部分，解析不出来时按 0 处理
pub fn parse_score(label: &str) -> f64 {
    let stripped = label.replacen('%', "", 1);
    let trimmed = stripped.trim_start();

    leading_number()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// 把分析结果映射成视图模型
pub fn present(result: &AnalysisResult) -> ReportViewModel {
    match result {
        AnalysisResult::Failure { kind, message } => ReportViewModel::Error(ErrorBanner {
            kind: *kind,
            message: message.clone(),
        }),
        AnalysisResult::Success(report) => ReportViewModel::Report(present_report(report)),
    }
}

fn present_report(report: &AnalysisReport) -> Report {
    let score = parse_score(&report.similarity_score);
    let band = ScoreBand::classify(score);

    Report {
        score_label: report.similarity_score.clone(),
        score,
        band,
        severity: band.severity(),
        progress_percent: score.clamp(0.0, 100.0),
        interpretation: report.interpretation.clone(),
        user: StatsPanel::new(
            PanelSide::User,
            &report.lexical_analysis.user,
            &report.tokens.user_tokens,
        ),
        reference: StatsPanel::new(
            PanelSide::Reference,
            &report.lexical_analysis.reference,
            &report.tokens.reference_tokens,
        ),
    }
}
