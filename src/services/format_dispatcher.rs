//! 格式分发服务 - 业务能力层
//!
//! 只负责"把一个文件变成文本框里的内容"，不关心提交

use tracing::{debug, info, warn};

use crate::models::{FileExtension, Format, SourceFile};
use crate::services::text_input::TextInput;
use crate::utils::logging::truncate_text;

/// 不支持的文件类型提示
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "Unsupported file type. Please upload .txt, .pdf, or .docx.";

/// 分发结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// 解码成功
    Extracted { format: Format, chars: usize },
    /// 解码失败，错误信息已写入文本框
    DecodeFailed { format: Format, message: String },
    /// 不支持的扩展名
    Unsupported { extension: String },
}

impl DispatchOutcome {
    pub fn is_extracted(&self) -> bool {
        matches!(self, DispatchOutcome::Extracted { .. })
    }
}

/// 格式分发器
///
/// 解码期间是文本框的唯一写入者
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatDispatcher;

impl FormatDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// 根据扩展名选择解码器并写回文本框
    pub async fn dispatch(&self, file: SourceFile, input: &mut TextInput) -> DispatchOutcome {
        let format = match file.extension() {
            FileExtension::Known(format) => format,
            FileExtension::Other(extension) => {
                warn!("⚠️ 不支持的文件类型: {} ({})", extension, file.name());
                input.settle(UNSUPPORTED_FORMAT_MESSAGE);
                return DispatchOutcome::Unsupported { extension };
            }
        };

        info!(
            "📄 正在读取文件: {} ({}, {} 字节)",
            file.name(),
            format,
            file.bytes().len()
        );
        input.begin_reading();

        match format.decoder().decode(file.bytes()).await {
            Ok(text) => {
                let chars = text.as_str().chars().count();
                debug!("解码结果预览: {}", truncate_text(text.as_str(), 80));
                input.settle(text.into_string());
                info!("✓ 文件读取完成，共 {} 个字符", chars);
                DispatchOutcome::Extracted { format, chars }
            }
            Err(e) => {
                warn!("⚠️ 文件解码失败: {}", e);
                let message = e.to_string();
                input.settle(message.clone());
                DispatchOutcome::DecodeFailed { format, message }
            }
        }
    }
}
