//! 文档解码层（Infrastructure）
//!
//! 每种格式一个解码器，统一实现 `DocumentDecoder`：
//! 输入原始字节，输出去掉首尾空白的纯文本，或者带解析器原始信息的 `DecodeError`。
//!
//! 格式到解码器的映射是封闭的 `match`，新增格式时编译器会检查所有分支。

pub mod docx;
pub mod pdf;
pub mod plain_text;

use async_trait::async_trait;

use crate::error::DecodeError;
use crate::models::{ExtractedText, Format};

pub use docx::DocxDecoder;
pub use pdf::{LopdfSource, PdfDecoder, PdfSource};
pub use plain_text::PlainTextDecoder;

/// 文档解码器
#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    /// 解码器对应的格式
    fn format(&self) -> Format;

    /// 把原始字节解码为纯文本
    async fn decode(&self, bytes: &[u8]) -> Result<ExtractedText, DecodeError>;
}

impl Format {
    /// 查找格式对应的解码器
    pub fn decoder(self) -> &'static dyn DocumentDecoder {
        match self {
            Format::Txt => &PlainTextDecoder,
            Format::Pdf => &PdfDecoder,
            Format::Docx => &DocxDecoder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table_is_consistent() {
        for format in Format::ALL {
            assert_eq!(format.decoder().format(), format);
        }
    }
}
