//! 相似度分析服务客户端
//!
//! 把文本 POST 给外部分析服务，并把响应原样转成 `AnalysisResult`。
//! 所有网络错误、非 2xx 状态和无法解析的响应体都会变成 `Failure`，不会抛给调用方。
//! 客户端不解读分数，也不校验字段之间是否一致。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{AnalysisReport, AnalysisRequest, AnalysisResult, ApiResponse};

/// 服务未给出错误信息时使用的文字
pub const UNKNOWN_SERVICE_ERROR: &str = "Unknown error";

/// 分析服务
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn submit(&self, request: &AnalysisRequest) -> AnalysisResult;
}

/// 基于 reqwest 的分析客户端
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: Client,
    endpoint: String,
}

impl AnalysisClient {
    /// 创建新的分析客户端
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.analysis_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 把响应体转成分析结果
    pub fn interpret_response(response: ApiResponse) -> AnalysisResult {
        if !response.is_success() {
            let message = response
                .message
                .unwrap_or_else(|| UNKNOWN_SERVICE_ERROR.to_string());
            return AnalysisResult::service_failure(message);
        }

        let Some(result) = response.result else {
            return AnalysisResult::transport_failure("Malformed analysis result: missing result");
        };

        match serde_json::from_value::<AnalysisReport>(result.clone()) {
            Ok(report) => AnalysisResult::Success(report),
            Err(e) => match result.get("message").and_then(Value::as_str) {
                // 服务在找不到参考文本等情况下会在 result 里只放一条 message
                Some(message) => AnalysisResult::service_failure(message),
                None => AnalysisResult::transport_failure(format!(
                    "Malformed analysis result: {}",
                    e
                )),
            },
        }
    }

    /// 非 2xx 响应的错误信息
    fn status_failure_message(status: reqwest::StatusCode, body: &str) -> String {
        let mut message = format!("Request failed with status code {}", status.as_u16());

        let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });

        if let Some(detail) = detail {
            message.push_str(": ");
            message.push_str(&detail);
        }

        message
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    async fn submit(&self, request: &AnalysisRequest) -> AnalysisResult {
        info!("📤 正在提交分析请求 ({} 个字符)", request.text().chars().count());
        debug!("请求地址: {}", self.endpoint);

        let response = match self
            .http
            .post(&self.endpoint)
            .json(&request.to_body())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ 分析请求发送失败: {}", e);
                return AnalysisResult::transport_failure(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("⚠️ 分析服务返回错误状态: {}", status);
            return AnalysisResult::transport_failure(Self::status_failure_message(status, &body));
        }

        let payload = match response.json::<ApiResponse>().await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("⚠️ 分析响应解析失败: {}", e);
                return AnalysisResult::transport_failure(e.to_string());
            }
        };

        debug!("分析服务状态: {}", payload.status);
        Self::interpret_response(payload)
    }
}
