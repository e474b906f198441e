use serde::Deserialize;
use std::path::Path;

use crate::error::{AppResult, ConfigError};

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 分析服务地址
    pub api_base_url: String,
    /// 分析接口路径
    pub api_endpoint: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 进度条宽度（字符数）
    pub progress_bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:5000".to_string(),
            api_endpoint: "/api/plagiarism".to_string(),
            request_timeout_secs: 30,
            verbose_logging: false,
            progress_bar_width: 40,
        }
    }
}

impl Config {
    /// 从环境变量读取，未设置或无法解析时使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env_overrides(self) -> Self {
        Self {
            api_base_url: std::env::var("PLAGIARISM_API_BASE_URL").unwrap_or(self.api_base_url),
            api_endpoint: std::env::var("PLAGIARISM_API_ENDPOINT").unwrap_or(self.api_endpoint),
            request_timeout_secs: env_parse("REQUEST_TIMEOUT_SECS")
                .unwrap_or(self.request_timeout_secs),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(self.verbose_logging),
            progress_bar_width: env_parse("PROGRESS_BAR_WIDTH").unwrap_or(self.progress_bar_width),
        }
    }

    /// 从 TOML 文件读取
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 读取配置：先读文件（如果给了路径），再用环境变量覆盖，最后校验
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let config = match path {
            Some(path) => Self::from_toml_file(path)?,
            None => Self::default(),
        }
        .with_env_overrides();

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "不能为空".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                reason: "必须大于 0".to_string(),
            });
        }
        if self.progress_bar_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "progress_bar_width",
                reason: "必须大于 0".to_string(),
            });
        }
        Ok(())
    }

    /// 完整的分析接口地址
    pub fn analysis_url(&self) -> String {
        let base = self.api_base_url.trim_end_matches('/');
        let endpoint = self.api_endpoint.trim_start_matches('/');
        format!("{}/{}", base, endpoint)
    }
}

/// 读取并解析环境变量，未设置或无法解析时返回 None
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "https://checker.example.com"
            request_timeout_secs = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url, "https://checker.example.com");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.api_endpoint, "/api/plagiarism");
        assert_eq!(config.progress_bar_width, 40);
    }

    #[test]
    fn test_analysis_url_joins_slashes() {
        let mut config = Config::default();
        assert_eq!(config.analysis_url(), "http://127.0.0.1:5000/api/plagiarism");

        config.api_base_url = "http://host/".to_string();
        config.api_endpoint = "check".to_string();
        assert_eq!(config.analysis_url(), "http://host/check");
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "request_timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let err = Config::from_toml_file(Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    #[test]
    fn test_load_reports_config_errors_as_app_errors() {
        let err = Config::load(Some(Path::new("/no/such/config.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::ReadFailed { .. })));
    }

    #[test]
    fn test_load_rejects_invalid_file_values() {
        let path = std::env::temp_dir().join(format!(
            "plagiarism-client-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "progress_bar_width = 0\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(
            err,
            AppError::Config(ConfigError::InvalidValue {
                field: "progress_bar_width",
                ..
            })
        ));
    }
}
