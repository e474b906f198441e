//! # Plagiarism Client
//!
//! 把用户输入或上传的文档统一成纯文本，提交给外部相似度分析服务，
//! 再把结构化结果渲染成可交互的报告。相似度本身由服务计算，这里不做。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Decoders）
//! - `decoders/` - 每种格式一个解码器，统一实现 `DocumentDecoder`
//! - `PlainTextDecoder` / `PdfDecoder` / `DocxDecoder`
//!
//! ### ② 业务能力层（Services）
//! - `FormatDispatcher` - 按扩展名选择解码器，写回文本框
//! - `AnalysisClient` - 调用分析服务，所有失败都转成 `Failure`
//!
//! ### ③ 展示层（Presentation）
//! - `present` - 结果 → 视图模型（分数区间、统计面板）
//! - `ReportViewState` - 词元面板的本地展开状态
//!
//! ### ④ 流程层（Workflow）
//! - `Session` - Idle → Submitting → Rendered，过期响应按序号丢弃
//!
//! ### ⑤ 编排层（Orchestration）
//! - `App` - 命令行、配置、输出

pub mod cli;
pub mod config;
pub mod decoders;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod presentation;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use cli::Cli;
pub use config::Config;
pub use decoders::DocumentDecoder;
pub use error::{AppError, AppResult, DecodeError};
pub use models::{AnalysisRequest, AnalysisResult, ExtractedText, Format, SourceFile};
pub use orchestrator::App;
pub use presentation::{present, ReportViewModel, ReportViewState, ScoreBand};
pub use services::{AnalysisClient, AnalysisService, FormatDispatcher, TextInput};
pub use workflow::{Session, SubmitOutcome};
