//! 命令行参数
//!
//! 命令行扮演页面的角色：`--file` 相当于选择文件，`--text` 相当于手动输入，
//! `--show-*-tokens` 相当于点击报告里的展开按钮。

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "plagiarism-client",
    version,
    about = "Check .txt/.pdf/.docx text against a similarity-analysis service."
)]
pub struct Cli {
    /// 要检测的文件（.txt / .pdf / .docx）
    #[arg(short, long, conflicts_with = "text", required_unless_present = "text")]
    pub file: Option<PathBuf>,

    /// 直接输入要检测的文本
    #[arg(short, long)]
    pub text: Option<String>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 展开用户文本的词元列表
    #[arg(long)]
    pub show_user_tokens: bool,

    /// 展开参考文本的词元列表
    #[arg(long)]
    pub show_reference_tokens: bool,

    /// 以 JSON 输出视图模型
    #[arg(long)]
    pub json: bool,
}
