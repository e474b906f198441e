//! PDF 解码器
//!
//! 按页号从 1 开始顺序处理，每页的文本片段用单个空格拼接，页与页之间用两个换行分隔。
//! 页序决定文档语义，所以即便解析库支持并行取页，这里也严格串行，
//! 并在每页之间让出调度，保证单线程下其它任务可以推进。

use async_trait::async_trait;
use lopdf::content::{Content, Operation};
use lopdf::Object;
use std::collections::BTreeMap;
use tracing::debug;

use super::DocumentDecoder;
use crate::error::DecodeError;
use crate::models::{ExtractedText, Format};

/// 分页文档的抽象
///
/// 页号从 1 开始
pub trait PdfSource: Send + Sync {
    /// 文档报告的页数
    fn page_count(&self) -> u32;

    /// 取出某一页的文本片段
    fn page_fragments(&self, page: u32) -> Result<Vec<String>, String>;
}

/// 基于 lopdf 的 PdfSource
pub struct LopdfSource {
    document: lopdf::Document,
}

impl LopdfSource {
    /// 从内存打开 PDF，失败时返回解析器的原始错误信息
    pub fn open(bytes: &[u8]) -> Result<Self, String> {
        let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
        Ok(Self { document })
    }
}

impl PdfSource for LopdfSource {
    fn page_count(&self) -> u32 {
        self.document.get_pages().len() as u32
    }

    fn page_fragments(&self, page: u32) -> Result<Vec<String>, String> {
        let page_id = *self
            .document
            .get_pages()
            .get(&page)
            .ok_or_else(|| format!("page {} not found", page))?;

        let encodings: BTreeMap<Vec<u8>, &str> = self
            .document
            .get_page_fonts(page_id)
            .into_iter()
            .map(|(name, font)| (name, font.get_font_encoding()))
            .collect();

        let data = self
            .document
            .get_page_content(page_id)
            .map_err(|e| e.to_string())?;
        let content = Content::decode(&data).map_err(|e| e.to_string())?;

        Ok(text_fragments(&content.operations, &encodings))
    }
}

/// 从内容流操作中取出文本片段
///
/// 每个 `Tj` / `'` / `"` 的字符串是一个片段，`TJ` 数组整体是一个片段，
/// 数组里较大的负字距视为词间空格。字符串按当前字体的编码解码。
pub fn text_fragments(
    operations: &[Operation],
    encodings: &BTreeMap<Vec<u8>, &str>,
) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut encoding: Option<&str> = None;

    for operation in operations {
        let shown: Option<&Object> = match operation.operator.as_str() {
            "Tf" => {
                encoding = operation
                    .operands
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| encodings.get(name).copied());
                None
            }
            "Tj" | "TJ" | "'" | "\"" => operation.operands.last(),
            _ => None,
        };

        let fragment = match shown {
            Some(Object::String(bytes, _)) => lopdf::Document::decode_text(encoding, bytes),
            Some(Object::Array(items)) => show_array_text(items, encoding),
            _ => continue,
        };

        if !fragment.trim().is_empty() {
            fragments.push(fragment);
        }
    }

    fragments
}

fn show_array_text(items: &[Object], encoding: Option<&str>) -> String {
    let mut text = String::new();
    for item in items {
        match item {
            Object::String(bytes, _) => {
                text.push_str(&lopdf::Document::decode_text(encoding, bytes))
            }
            Object::Integer(offset) if *offset < -100 => text.push(' '),
            Object::Real(offset) if *offset < -100.0 => text.push(' '),
            _ => {}
        }
    }
    text
}

/// PDF 解码器
pub struct PdfDecoder;

impl PdfDecoder {
    /// 按页序拼接整篇文本
    pub async fn decode_pages(source: &dyn PdfSource) -> Result<ExtractedText, DecodeError> {
        let page_count = source.page_count();
        debug!("PDF 共 {} 页", page_count);

        let mut full_text = String::new();
        for page in 1..=page_count {
            let fragments = source
                .page_fragments(page)
                .map_err(|message| DecodeError::new(Format::Pdf, message))?;

            full_text.push_str(&fragments.join(" "));
            full_text.push_str("\n\n");

            tokio::task::yield_now().await;
        }

        Ok(ExtractedText::new(full_text))
    }
}

#[async_trait]
impl DocumentDecoder for PdfDecoder {
    fn format(&self) -> Format {
        Format::Pdf
    }

    async fn decode(&self, bytes: &[u8]) -> Result<ExtractedText, DecodeError> {
        let source =
            LopdfSource::open(bytes).map_err(|message| DecodeError::new(Format::Pdf, message))?;
        Self::decode_pages(&source).await
    }
}
