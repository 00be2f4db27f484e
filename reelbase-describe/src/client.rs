use std::time::Duration;

use reelbase_catalog::types::EntityKind;
use serde::{Deserialize, Serialize};

use crate::config::DescribeConfig;
use crate::error::DescribeError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// ── Wire types ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    /// Text of the first candidate, with its parts joined.
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();
        let trimmed = text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

/// The instruction sent for a title.
pub fn prompt(title: &str, kind: EntityKind) -> String {
    format!(
        "Write a short, engaging, and creative {} description (max 200 chars) for a sci-fi/drama titled \"{}\".",
        kind.as_str().to_lowercase(),
        title
    )
}

/// HTTP client for the text generation endpoint.
pub struct DescriptionClient {
    http: reqwest::Client,
    config: DescribeConfig,
}

impl DescriptionClient {
    pub fn new(config: DescribeConfig) -> Result<Self, DescribeError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Ask the model for a description of `title`.
    ///
    /// Returns the first candidate's text, not clamped to `max_chars`.
    pub async fn generate(&self, title: &str, kind: EntityKind) -> Result<String, DescribeError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(DescribeError::MissingApiKey)?;

        let prompt = prompt(title, kind);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        log::debug!("Requesting {} description for '{}'", kind.as_str().to_lowercase(), title);
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DescribeError::InvalidCredentials(status.as_u16()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DescribeError::RateLimit);
        }

        let text = resp.text().await?;
        if !status.is_success() {
            return Err(DescribeError::ServerError {
                status: status.as_u16(),
                message: text.chars().take(200).collect(),
            });
        }

        let response: GenerateResponse = serde_json::from_str(&text)?;
        response.into_text().ok_or(DescribeError::Empty)
    }
}
