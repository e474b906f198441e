//! 文档相关的数据模型
//!
//! 用户选择的文件（SourceFile）、格式枚举（Format）、解码结果（ExtractedText）

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// 支持的文档格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// 纯文本
    Txt,
    /// PDF
    Pdf,
    /// Word 文档
    Docx,
}

impl Format {
    /// 所有支持的格式
    pub const ALL: [Format; 3] = [Format::Txt, Format::Pdf, Format::Docx];

    /// 扩展名（小写，不含点）
    pub fn extension(self) -> &'static str {
        match self {
            Format::Txt => "txt",
            Format::Pdf => "pdf",
            Format::Docx => "docx",
        }
    }

    /// 从扩展名解析格式（大小写不敏感）
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL.into_iter().find(|f| f.extension() == ext)
    }

    /// 从文件名解析格式
    ///
    /// 取最后一个点之后的部分；没有点时整个文件名就是扩展名
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::from_extension(extension_of(name))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Txt => "TXT",
            Format::Pdf => "PDF",
            Format::Docx => "DOCX",
        })
    }
}

/// 文件扩展名分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileExtension {
    Known(Format),
    Other(String),
}

fn extension_of(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

/// 用户选择的文件
///
/// 创建后不可变，解码完成（无论成功失败）后即丢弃
#[derive(Debug, Clone)]
pub struct SourceFile {
    name: String,
    bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// 从磁盘读取文件
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn extension(&self) -> FileExtension {
        let ext = extension_of(&self.name);
        match Format::from_extension(ext) {
            Some(format) => FileExtension::Known(format),
            None => FileExtension::Other(ext.to_ascii_lowercase()),
        }
    }
}

/// 解码得到的纯文本
///
/// 构造时已去掉首尾空白
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
}

impl ExtractedText {
    pub fn new(content: impl AsRef<str>) -> Self {
        Self {
            content: content.as_ref().trim().to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn into_string(self) -> String {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
