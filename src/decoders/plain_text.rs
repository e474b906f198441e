use async_trait::async_trait;

use super::DocumentDecoder;
use crate::error::DecodeError;
use crate::models::{ExtractedText, Format};

/// 纯文本解码器
///
/// 字节直接按 UTF-8 解释，非法序列替换为 U+FFFD，不会失败
pub struct PlainTextDecoder;

#[async_trait]
impl DocumentDecoder for PlainTextDecoder {
    fn format(&self) -> Format {
        Format::Txt
    }

    async fn decode(&self, bytes: &[u8]) -> Result<ExtractedText, DecodeError> {
        Ok(ExtractedText::new(String::from_utf8_lossy(bytes)))
    }
}
