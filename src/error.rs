use std::fmt;

use crate::models::Format;

/// 应用程序错误类型
///
/// 只覆盖启动阶段（配置、读文件）的错误。
/// 解码失败、服务失败、网络失败都会在各自的边界被转换成可见状态，不会走到这里。
#[derive(Debug)]
pub enum AppError {
    /// 文件操作错误
    File(FileError),
    /// 配置错误
    Config(ConfigError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound { path: String },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件 {} 失败: {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FileError::NotFound { .. } => None,
        }
    }
}

/// 配置错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 配置文件读取失败
    #[error("无法读取配置文件 {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件解析失败
    #[error("无法解析配置文件 {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 配置项不合法
    #[error("配置项 {field} 不合法: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// 文档解码错误
///
/// Display 文本会原样写入文本输入框，所以用英文并保留解析器的原始信息。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error reading {format}: {message}")]
pub struct DecodeError {
    pub format: Format,
    pub message: String,
}

impl DecodeError {
    pub fn new(format: Format, message: impl Into<String>) -> Self {
        Self {
            format,
            message: message.into(),
        }
    }
}

// ========== 错误转换 ==========

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let path = path.into();
        match source_kind(&source) {
            Some(std::io::ErrorKind::NotFound) => AppError::File(FileError::NotFound { path }),
            _ => AppError::File(FileError::ReadFailed {
                path,
                source: Box::new(source),
            }),
        }
    }
}

fn source_kind(source: &(dyn std::error::Error + 'static)) -> Option<std::io::ErrorKind> {
    source.downcast_ref::<std::io::Error>().map(|e| e.kind())
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
