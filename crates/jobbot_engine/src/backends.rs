use std::time::Duration;

use crate::types::{
    AdapterError, AdapterErrorKind, ChatReply, ChatReplyWire, JobRecord, SearchResponseWire,
};

/// Static configuration for both backend adapters.
///
/// `request_timeout` defaults to `None`: the original behavior imposes no
/// deadline on either backend call. Hosts that want one opt in explicitly.
#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub chat_url: String,
    pub jobs_url: String,
    pub request_timeout: Option<Duration>,
}

impl BackendSettings {
    pub fn new(chat_url: impl Into<String>, jobs_url: impl Into<String>) -> Self {
        Self {
            chat_url: chat_url.into(),
            jobs_url: jobs_url.into(),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, utterance: &str) -> Result<ChatReply, AdapterError>;
}

#[async_trait::async_trait]
pub trait JobSearchBackend: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<JobRecord>, AdapterError>;
}

/// Chat adapter speaking `POST {chat_url}` with `{"message": ...}`.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    settings: BackendSettings,
}

impl HttpChatBackend {
    pub fn new(settings: BackendSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl ChatBackend for HttpChatBackend {
    async fn send(&self, utterance: &str) -> Result<ChatReply, AdapterError> {
        let client = build_client(&self.settings)?;
        let response = client
            .post(&self.settings.chat_url)
            .json(&serde_json::json!({ "message": utterance }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::new(
                AdapterErrorKind::Unreachable,
                status.to_string(),
            ));
        }

        let wire: ChatReplyWire = response
            .json()
            .await
            .map_err(|err| AdapterError::new(AdapterErrorKind::MalformedResponse, err.to_string()))?;
        Ok(ChatReply {
            reply: wire.reply.unwrap_or_default(),
        })
    }
}

/// Job search adapter speaking `GET {jobs_url}?query=...`.
#[derive(Debug, Clone)]
pub struct HttpJobSearchBackend {
    settings: BackendSettings,
}

impl HttpJobSearchBackend {
    pub fn new(settings: BackendSettings) -> Self {
        Self { settings }
    }
}

#[async_trait::async_trait]
impl JobSearchBackend for HttpJobSearchBackend {
    async fn search(&self, query: &str) -> Result<Vec<JobRecord>, AdapterError> {
        let client = build_client(&self.settings)?;
        let response = client
            .get(&self.settings.jobs_url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::new(
                AdapterErrorKind::Unreachable,
                status.to_string(),
            ));
        }

        let wire: SearchResponseWire = response
            .json()
            .await
            .map_err(|err| AdapterError::new(AdapterErrorKind::MalformedResponse, err.to_string()))?;
        Ok(wire.results.into_iter().map(JobRecord::from).collect())
    }
}

fn build_client(settings: &BackendSettings) -> Result<reqwest::Client, AdapterError> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|err| AdapterError::new(AdapterErrorKind::Unreachable, err.to_string()))
}

fn map_transport_error(err: reqwest::Error) -> AdapterError {
    if err.is_decode() {
        return AdapterError::new(AdapterErrorKind::MalformedResponse, err.to_string());
    }
    AdapterError::new(AdapterErrorKind::Unreachable, err.to_string())
}
