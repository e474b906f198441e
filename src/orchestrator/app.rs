//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：打印启动信息、创建分析客户端
//! 2. **输入装载**：读取文件并交给会话解码，或直接写入手动输入的文本
//! 3. **提交与渲染**：驱动一次会话提交，应用面板切换，输出报告
//!
//! 只有启动阶段的问题（读不到文件、建不了 HTTP 客户端）会作为错误返回；
//! 解码失败、服务失败、网络失败都以可见的文字结束，程序正常退出。

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::cli::Cli;
use crate::config::Config;
use crate::models::SourceFile;
use crate::presentation::{render_text, PanelSide, ReportViewModel, ReportViewState};
use crate::services::{AnalysisClient, AnalysisService, DispatchOutcome};
use crate::utils::logging::{log_report_summary, log_startup};
use crate::workflow::{Session, SubmitOutcome};

/// JSON 输出格式
#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a ReportViewModel,
    view_state: &'a ReportViewState,
}

/// 应用主结构
pub struct App {
    config: Config,
    client: AnalysisClient,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client = AnalysisClient::new(&config).context("无法创建 HTTP 客户端")?;

        Ok(Self { config, client })
    }

    /// 运行一次检测，报告写到 stdout
    pub async fn run(&self, cli: &Cli) -> Result<()> {
        let output = self.execute(cli, &self.client).await?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;

        Ok(())
    }

    /// 执行检测并返回要输出的文字
    pub async fn execute(&self, cli: &Cli, service: &dyn AnalysisService) -> Result<String> {
        let mut session = Session::new();

        if let Some(path) = &cli.file {
            let file = SourceFile::from_path(path)
                .await
                .with_context(|| format!("无法读取文件: {}", path.display()))?;

            match session.upload(file).await {
                DispatchOutcome::Extracted { format, chars } => {
                    info!("✓ {} 文件解码完成 ({} 个字符)", format, chars);
                }
                DispatchOutcome::DecodeFailed { .. } | DispatchOutcome::Unsupported { .. } => {
                    // 文本框里已经是给用户看的提示，不再提交
                    return Ok(format!("{}\n", session.input().value()));
                }
            }
        } else if let Some(text) = &cli.text {
            session.type_text(text.as_str());
        }

        match session.submit(service).await {
            SubmitOutcome::Rendered => {}
            SubmitOutcome::Blocked(blocked) => return Ok(format!("{}\n", blocked.warning())),
            SubmitOutcome::Stale => return Ok(String::new()),
        }

        if cli.show_user_tokens {
            session.toggle(PanelSide::User);
        }
        if cli.show_reference_tokens {
            session.toggle(PanelSide::Reference);
        }

        let Some(rendered) = session.report() else {
            return Ok(String::new());
        };
        log_report_summary(&rendered.model);

        if cli.json {
            let json = serde_json::to_string_pretty(&JsonOutput {
                report: &rendered.model,
                view_state: &rendered.view_state,
            })?;
            Ok(format!("{}\n", json))
        } else {
            Ok(render_text(
                &rendered.model,
                &rendered.view_state,
                self.config.progress_bar_width,
            ))
        }
    }
}
