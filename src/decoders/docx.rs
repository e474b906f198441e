//! DOCX 解码器
//!
//! 用 docx-rs 解析包，沿 Paragraph → Run → Text 取出纯文本。
//! 同一段内的文本直接拼接，制表符和换行保留，每个段落（包括空段落）结束追加两个换行。
//! 表格按行、单元格的顺序展开其中的段落。

use async_trait::async_trait;
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

use super::DocumentDecoder;
use crate::error::DecodeError;
use crate::models::{ExtractedText, Format};

/// DOCX 解码器
pub struct DocxDecoder;

impl DocxDecoder {
    /// 解析包并提取纯文本（未 trim）
    fn extract(bytes: &[u8]) -> Result<String, String> {
        let docx = read_docx(bytes).map_err(|e| e.to_string())?;

        let mut text = String::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => push_paragraph(paragraph, &mut text),
                DocumentChild::Table(table) => push_table(table, &mut text),
                _ => {}
            }
        }
        Ok(text)
    }
}

#[async_trait]
impl DocumentDecoder for DocxDecoder {
    fn format(&self) -> Format {
        Format::Docx
    }

    async fn decode(&self, bytes: &[u8]) -> Result<ExtractedText, DecodeError> {
        let text =
            Self::extract(bytes).map_err(|message| DecodeError::new(Format::Docx, message))?;

        tokio::task::yield_now().await;

        Ok(ExtractedText::new(text))
    }
}

fn push_paragraph(paragraph: &Paragraph, text: &mut String) {
    push_paragraph_children(&paragraph.children, text);
    text.push_str("\n\n");
}

fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            _ => {}
        }
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn push_table(table: &Table, text: &mut String) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                if let TableCellContent::Paragraph(paragraph) = content {
                    push_paragraph(paragraph, text);
                }
            }
        }
    }
}
