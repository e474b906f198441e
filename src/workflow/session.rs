//! 报告会话 - 流程层
//!
//! 一个会话持有文本输入框和当前显示的报告，状态流转：
//!
//! ```text
//! Idle → Submitting → Rendered(Success | Failure)
//! ```
//!
//! Rendered 之后只接受本地的面板切换，不会自动回到 Idle；
//! 新的提交会整体替换旧报告及其界面状态。
//!
//! 每次提交发放一个递增的序号，只有最新序号的结果会被渲染，
//! 晚到的旧响应直接丢弃。

use tracing::{debug, info, warn};

use crate::models::{AnalysisRequest, AnalysisResult, SourceFile};
use crate::presentation::{present, PanelSide, ReportViewModel, ReportViewState};
use crate::services::{AnalysisService, DispatchOutcome, FormatDispatcher, SubmitBlocked, TextInput};

/// 会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
    Rendered,
}

/// 提交凭证
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    sequence: u64,
    request: AnalysisRequest,
}

impl SubmissionTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }
}

/// 已渲染的报告
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub sequence: u64,
    pub model: ReportViewModel,
    pub view_state: ReportViewState,
}

/// 一次提交的结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 结果已渲染（成功或失败都算）
    Rendered,
    /// 提交被拦截，没有发出请求
    Blocked(SubmitBlocked),
    /// 响应已过期，被丢弃
    Stale,
}

#[derive(Debug)]
pub struct Session {
    input: TextInput,
    dispatcher: FormatDispatcher,
    state: SessionState,
    report: Option<RenderedReport>,
    latest_sequence: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: TextInput::new(),
            dispatcher: FormatDispatcher::new(),
            state: SessionState::Idle,
            report: None,
            latest_sequence: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn report(&self) -> Option<&RenderedReport> {
        self.report.as_ref()
    }

    /// 手动输入文本
    pub fn type_text(&mut self, text: impl Into<String>) {
        self.input.set_typed(text);
    }

    /// 上传文件，解码结果写入文本框
    pub async fn upload(&mut self, file: SourceFile) -> DispatchOutcome {
        self.dispatcher.dispatch(file, &mut self.input).await
    }

    /// 开始一次提交
    ///
    /// 文本为空或仍在解码时拦截，不发放凭证
    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SubmitBlocked> {
        let text = self.input.submittable_text().map_err(|blocked| {
            warn!("{}", blocked);
            blocked
        })?;

        // submittable_text 已保证非空
        let request = AnalysisRequest::new(text).ok_or(SubmitBlocked::EmptyInput)?;

        self.latest_sequence += 1;
        self.state = SessionState::Submitting;
        debug!("发放提交序号 #{}", self.latest_sequence);

        Ok(SubmissionTicket {
            sequence: self.latest_sequence,
            request,
        })
    }

    /// 提交完成
    ///
    /// 返回结果是否被渲染；不是最新序号的结果会被丢弃
    pub fn complete(&mut self, ticket: SubmissionTicket, result: AnalysisResult) -> bool {
        if ticket.sequence != self.latest_sequence {
            info!(
                "丢弃过期响应 #{} (最新 #{})",
                ticket.sequence, self.latest_sequence
            );
            return false;
        }

        self.report = Some(RenderedReport {
            sequence: ticket.sequence,
            model: present(&result),
            view_state: ReportViewState::new(),
        });
        self.state = SessionState::Rendered;
        true
    }

    /// 提交当前文本并渲染结果
    pub async fn submit(&mut self, service: &dyn AnalysisService) -> SubmitOutcome {
        let ticket = match self.begin_submission() {
            Ok(ticket) => ticket,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let result = service.submit(ticket.request()).await;

        if self.complete(ticket, result) {
            SubmitOutcome::Rendered
        } else {
            SubmitOutcome::Stale
        }
    }

    /// 切换词元面板，只在已渲染成功报告时生效
    pub fn toggle(&mut self, side: PanelSide) -> Option<bool> {
        if self.state != SessionState::Rendered {
            return None;
        }

        let report = self.report.as_mut()?;
        match report.model {
            ReportViewModel::Report(_) => Some(report.view_state.toggle(side)),
            ReportViewModel::Error(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisReport, FailureKind, LexicalAnalysis, TokenLists};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// 固定返回同一结果，并记录调用次数
    struct FixedService {
        result: AnalysisResult,
        calls: AtomicUsize,
    }

    impl FixedService {
        fn new(result: AnalysisResult) -> Self {
            Self {
                result,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AnalysisService for FixedService {
        async fn submit(&self, _request: &AnalysisRequest) -> AnalysisResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn success(score: &str) -> AnalysisResult {
        AnalysisResult::Success(AnalysisReport {
            similarity_score: score.to_string(),
            interpretation: "Low similarity detected".to_string(),
            lexical_analysis: LexicalAnalysis::default(),
            tokens: TokenLists::default(),
        })
    }

    fn rendered_score(session: &Session) -> Option<String> {
        match &session.report()?.model {
            ReportViewModel::Report(report) => Some(report.score_label.clone()),
            ReportViewModel::Error(_) => None,
        }
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_service() {
        let service = FixedService::new(success("10%"));
        let mut session = Session::new();
        session.type_text("   \n ");

        let outcome = session.submit(&service).await;

        assert_eq!(outcome, SubmitOutcome::Blocked(SubmitBlocked::EmptyInput));
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.report().is_none());
    }

    #[tokio::test]
    async fn test_submit_renders_success() {
        let service = FixedService::new(success("25.00%"));
        let mut session = Session::new();
        session.type_text("some essay");

        assert_eq!(session.submit(&service).await, SubmitOutcome::Rendered);
        assert_eq!(session.state(), SessionState::Rendered);
        assert_eq!(rendered_score(&session).as_deref(), Some("25.00%"));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_keeps_text_input() {
        let service = FixedService::new(AnalysisResult::transport_failure("connection refused"));
        let mut session = Session::new();
        session.type_text("my essay text");

        assert_eq!(session.submit(&service).await, SubmitOutcome::Rendered);
        assert_eq!(session.input().value(), "my essay text");

        let report = session.report().unwrap();
        assert!(matches!(
            &report.model,
            ReportViewModel::Error(banner)
                if banner.kind == FailureKind::Transport && banner.message == "connection refused"
        ));
        // 错误横幅没有面板可切换
        assert_eq!(session.toggle(PanelSide::User), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = Session::new();
        session.type_text("first draft");
        let first = session.begin_submission().unwrap();
        session.type_text("second draft");
        let second = session.begin_submission().unwrap();
        assert!(second.sequence() > first.sequence());

        // 新请求先返回，旧请求后到
        assert!(session.complete(second, success("30%")));
        assert!(!session.complete(first, success("90%")));

        assert_eq!(rendered_score(&session).as_deref(), Some("30%"));
        assert_eq!(session.state(), SessionState::Rendered);
    }

    #[tokio::test]
    async fn test_new_submission_replaces_report_and_view_state() {
        let mut session = Session::new();
        session.type_text("essay");

        session.submit(&FixedService::new(success("10%"))).await;
        assert_eq!(session.toggle(PanelSide::Reference), Some(true));
        assert!(session
            .report()
            .unwrap()
            .view_state
            .is_visible(PanelSide::Reference));

        session.submit(&FixedService::new(success("70%"))).await;
        let report = session.report().unwrap();
        assert_eq!(rendered_score(&session).as_deref(), Some("70%"));
        assert!(!report.view_state.is_visible(PanelSide::Reference));
    }

    #[test]
    fn test_toggle_before_render_is_ignored() {
        let mut session = Session::new();
        assert_eq!(session.toggle(PanelSide::User), None);
    }

    #[tokio::test]
    async fn test_upload_then_submit() {
        let service = FixedService::new(success("5%"));
        let mut session = Session::new();

        let outcome = session
            .upload(SourceFile::new("essay.txt", b"  uploaded words ".to_vec()))
            .await;
        assert!(outcome.is_extracted());
        assert_eq!(session.input().value(), "uploaded words");

        assert_eq!(session.submit(&service).await, SubmitOutcome::Rendered);
    }
}
