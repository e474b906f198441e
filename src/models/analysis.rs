//! 相似度分析的请求与结果模型
//!
//! 包含两部分：
//! - 领域类型：`AnalysisRequest`、`AnalysisResult`
//! - 线上格式：`AnalysisRequestBody`、`ApiResponse`（与分析服务的 JSON 契约一一对应）

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 分析请求
///
/// 文本保证非空（已去掉首尾空白）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    text: String,
}

impl AnalysisRequest {
    /// 文本为空或只有空白时返回 None
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let text = text.as_ref().trim();
        if text.is_empty() {
            None
        } else {
            Some(Self {
                text: text.to_string(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn to_body(&self) -> AnalysisRequestBody<'_> {
        AnalysisRequestBody {
            text_input: &self.text,
        }
    }
}

/// 单侧文本的词法统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_tokens: u64,
    pub unique_tokens: u64,
    pub keyword_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexicalAnalysis {
    pub user: Stats,
    pub reference: Stats,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenLists {
    pub user_tokens: Vec<String>,
    pub reference_tokens: Vec<String>,
}

/// 分析成功时服务返回的报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// 百分比字符串，例如 "42.50%"
    pub similarity_score: String,
    pub interpretation: String,
    pub lexical_analysis: LexicalAnalysis,
    pub tokens: TokenLists,
}

/// 失败来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// 服务返回 status != "success"
    Service,
    /// 网络错误、非 2xx、响应体无法解析
    Transport,
}

/// 分析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisResult {
    Success(AnalysisReport),
    Failure { kind: FailureKind, message: String },
}

impl AnalysisResult {
    pub fn service_failure(message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            kind: FailureKind::Service,
            message: message.into(),
        }
    }

    pub fn transport_failure(message: impl Into<String>) -> Self {
        AnalysisResult::Failure {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResult::Success(_))
    }
}

// ========== 线上格式 ==========

/// 请求体 `{ "text_input": "..." }`
#[derive(Debug, Serialize)]
pub struct AnalysisRequestBody<'a> {
    pub text_input: &'a str,
}

/// 响应体
///
/// `result` 先按原始 JSON 保存，由客户端决定能否解析成完整报告
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<Value>,
}

impl ApiResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}
