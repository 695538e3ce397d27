use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use journey_core::model::{Language, Message};

use crate::error::CoachError;

/// External coach collaborator: turns a user message plus the conversation
/// so far into a reply in the selected language.
#[async_trait]
pub trait CoachClient: Send + Sync {
    /// Produce a reply to `message`.
    ///
    /// # Errors
    ///
    /// Returns `CoachError` when no reply could be obtained; callers are
    /// expected to substitute a fallback rather than surface the failure.
    async fn respond(
        &self,
        message: &str,
        history: &[Message],
        language: Language,
    ) -> Result<String, CoachError>;
}

#[derive(Clone, Debug)]
pub struct CoachConfig {
    pub endpoint: String,
}

impl CoachConfig {
    /// Validates the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::InvalidEndpoint` if the URL does not parse.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, CoachError> {
        let endpoint = endpoint.into();
        if Url::parse(&endpoint).is_err() {
            return Err(CoachError::InvalidEndpoint);
        }
        Ok(Self { endpoint })
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        let endpoint = env::var("JOURNEY_COACH_URL").ok()?;
        if endpoint.trim().is_empty() {
            return None;
        }
        Self::new(endpoint).ok()
    }
}

/// HTTP implementation of the coach contract.
#[derive(Clone)]
pub struct HttpCoachClient {
    client: Client,
    config: Option<CoachConfig>,
}

impl HttpCoachClient {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(CoachConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<CoachConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }
}

#[async_trait]
impl CoachClient for HttpCoachClient {
    async fn respond(
        &self,
        message: &str,
        history: &[Message],
        language: Language,
    ) -> Result<String, CoachError> {
        let config = self.config.as_ref().ok_or(CoachError::Disabled)?;

        let payload = CoachRequest {
            message,
            messages: history.iter().map(WireMessage::from).collect(),
            language: language.as_code(),
        };

        let response = self
            .client
            .post(&config.endpoint)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CoachError::HttpStatus(response.status()));
        }

        let body: CoachReply = response.json().await?;
        let reply = body.message.trim();
        if reply.is_empty() {
            return Err(CoachError::EmptyReply);
        }

        Ok(reply.to_string())
    }
}

#[derive(Debug, Serialize)]
struct CoachRequest<'a> {
    message: &'a str,
    messages: Vec<WireMessage<'a>>,
    language: &'a str,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

impl<'a> From<&'a Message> for WireMessage<'a> {
    fn from(message: &'a Message) -> Self {
        Self {
            role: message.role.as_str(),
            content: &message.content,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CoachReply {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_garbage_urls() {
        assert!(matches!(
            CoachConfig::new("not a url").unwrap_err(),
            CoachError::InvalidEndpoint
        ));
        assert!(CoachConfig::new("http://localhost:3000/api/chat").is_ok());
    }

    #[tokio::test]
    async fn unconfigured_client_reports_disabled() {
        let client = HttpCoachClient::new(None);
        assert!(!client.enabled());

        let err = client
            .respond("hello", &[], Language::En)
            .await
            .unwrap_err();
        assert!(matches!(err, CoachError::Disabled));
    }
}
