use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ReviewError;
use crate::prompt::{ReviewRequest, build_prompt};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// API key，`Debug` 输出时隐藏内容
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[derive(Debug, Clone)]
pub struct ReviewConfig {
    pub api_key: ApiKey,
    pub model: String,
    /// 不含 `/models/...` 的 API 根地址
    pub api_base: String,
    pub timeout: Duration,
}

impl ReviewConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

/// Gemini `generateContent` 客户端
#[derive(Debug)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: ReviewConfig,
}

impl GeminiClient {
    pub fn new(config: ReviewConfig) -> Result<Self, ReviewError> {
        if config.api_key.is_blank() {
            return Err(ReviewError::MissingApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// 发送审查请求，返回模型生成的 markdown 文本
    pub async fn review(&self, request: &ReviewRequest<'_>) -> Result<String, ReviewError> {
        let prompt = build_prompt(request);
        let url = self.config.endpoint();
        info!(model = %self.config.model, language = %request.language, "requesting code review");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.expose())
            .json(&GenerateContentRequest::new(&prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, bytes = body.len(), "review response received");

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let response: GenerateContentResponse = serde_json::from_str(&body)?;
        response.into_text()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    pub(crate) fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// 拼接第一个候选结果的所有文本片段
    pub(crate) fn into_text(self) -> Result<String, ReviewError> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(ReviewError::Blocked { reason });
        }

        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(ReviewError::EmptyResponse);
        }
        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
    status: Option<String>,
}

/// 解析非 2xx 响应的错误体，无法解析时使用原始响应体
pub(crate) fn api_error(status: u16, body: &str) -> ReviewError {
    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error: ApiErrorDetail {
                message,
                status: Some(kind),
            },
        }) => format!("{kind}: {message}"),
        Ok(ApiErrorBody { error }) => error.message,
        Err(_) => body.trim().to_string(),
    };
    ReviewError::Api { status, message }
}
