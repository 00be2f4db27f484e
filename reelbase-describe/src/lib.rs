//! AI-generated descriptions for shows and episodes.
//!
//! [`DescriptionClient`] talks to a Gemini-style `generateContent` endpoint.
//! [`describe`] wraps it for interactive use: it always returns displayable
//! text, substituting a fixed message when the key is missing or the request
//! fails.

pub mod client;
pub mod config;
pub mod error;

pub use client::{DescriptionClient, prompt};
pub use config::{DescribeConfig, KeySource, key_source};
pub use error::DescribeError;
pub use reelbase_catalog::types::EntityKind;

pub const MISSING_KEY_MESSAGE: &str =
    "Gemini API Key is missing. Please configure it to use AI features.";
pub const EMPTY_MESSAGE: &str = "No description generated.";
pub const FAILURE_MESSAGE: &str = "Failed to generate description via AI.";

/// Generate a description, never failing.
///
/// The result is at most `config.max_chars` characters.
pub async fn describe(config: &DescribeConfig, title: &str, kind: EntityKind) -> String {
    let text = match generate(config, title, kind).await {
        Ok(text) => text,
        Err(DescribeError::MissingApiKey) => MISSING_KEY_MESSAGE.to_string(),
        Err(DescribeError::Empty) => EMPTY_MESSAGE.to_string(),
        Err(e) => {
            log::error!("Description generation failed: {}", e);
            FAILURE_MESSAGE.to_string()
        }
    };
    clamp_chars(&text, config.max_chars)
}

async fn generate(
    config: &DescribeConfig,
    title: &str,
    kind: EntityKind,
) -> Result<String, DescribeError> {
    if config.api_key.is_none() {
        return Err(DescribeError::MissingApiKey);
    }
    DescriptionClient::new(config.clone())?
        .generate(title, kind)
        .await
}

/// First `max` characters of `text`.
pub fn clamp_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_counts_characters_not_bytes() {
        assert_eq!(clamp_chars("héllo", 2), "hé");
        assert_eq!(clamp_chars("short", 200), "short");
        assert_eq!(clamp_chars("", 5), "");
    }

    #[test]
    fn fallback_messages_fit_default_limit() {
        for message in [MISSING_KEY_MESSAGE, EMPTY_MESSAGE, FAILURE_MESSAGE] {
            assert!(message.chars().count() <= config::DEFAULT_MAX_CHARS);
        }
    }
}
