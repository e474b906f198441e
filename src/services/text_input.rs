//! 文本输入框
//!
//! 手动输入和文件解码共用的唯一文本值，最后完成的写入者生效。
//! 解码进行中显示占位文字，此时不允许提交。

use std::fmt;

/// 解码进行中的占位文字
pub const READING_PLACEHOLDER: &str = "Reading file... Please wait...";

/// 空提交时的提示
pub const EMPTY_INPUT_WARNING: &str = "⚠️ Please enter or upload text before analyzing.";

/// 正在解码时提交的提示
pub const STILL_READING_WARNING: &str = "⚠️ The uploaded file is still being read. Please wait.";

/// 提交被拦截的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// 文本为空或只有空白
    EmptyInput,
    /// 文件仍在解码
    ExtractionPending,
}

impl SubmitBlocked {
    /// 展示给用户的提示
    pub fn warning(self) -> &'static str {
        match self {
            SubmitBlocked::EmptyInput => EMPTY_INPUT_WARNING,
            SubmitBlocked::ExtractionPending => STILL_READING_WARNING,
        }
    }
}

impl fmt::Display for SubmitBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.warning())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    reading: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_reading(&self) -> bool {
        self.reading
    }

    /// 手动输入
    pub fn set_typed(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.reading = false;
    }

    /// 开始解码，显示占位文字
    pub fn begin_reading(&mut self) {
        self.value = READING_PLACEHOLDER.to_string();
        self.reading = true;
    }

    /// 解码结束，写入最终内容或错误信息
    pub fn settle(&mut self, text: impl Into<String>) {
        self.value = text.into();
        self.reading = false;
    }

    /// 取出可提交的文本（已 trim）
    pub fn submittable_text(&self) -> Result<String, SubmitBlocked> {
        if self.reading {
            return Err(SubmitBlocked::ExtractionPending);
        }

        let text = self.value.trim();
        if text.is_empty() {
            return Err(SubmitBlocked::EmptyInput);
        }

        Ok(text.to_string())
    }
}
