use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::json;

use concierge_core::{BackendReply, IndexSnapshot, Provider};

use crate::backend::{Backend, BackendError};
use crate::wire::QueryReplyWire;

/// Literal query text used as a liveness probe.
const PING_QUERY: &str = "PING";

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// [`Backend`] over HTTP against a single base URL.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        Self::with_settings(base_url, HttpSettings::default())
    }

    pub fn with_settings(base_url: &str, settings: HttpSettings) -> Result<Self, BackendError> {
        let base = Url::parse(base_url)
            .map_err(|err| BackendError::Malformed(format!("invalid base url: {err}")))?;
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        self.base
            .join(path)
            .map_err(|err| BackendError::Malformed(format!("invalid endpoint {path}: {err}")))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn query(&self, text: &str) -> Result<BackendReply, BackendError> {
        let response = self
            .client
            .post(self.endpoint("query")?)
            .json(&json!({ "query": text }))
            .send()
            .await
            .map_err(map_transport)?;

        let wire: QueryReplyWire = response.json().await.map_err(map_body)?;
        Ok(wire.into())
    }

    async fn probe(&self) -> bool {
        let endpoint = match self.endpoint("query") {
            Ok(url) => url,
            Err(_) => return false,
        };
        match self
            .client
            .post(endpoint)
            .json(&json!({ "query": PING_QUERY }))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn restart(&self) -> Result<(), BackendError> {
        self.client
            .post(self.endpoint("restart")?)
            .send()
            .await
            .map_err(map_transport)?;
        Ok(())
    }

    async fn index_status(&self) -> Result<IndexSnapshot, BackendError> {
        let response = self
            .client
            .get(self.endpoint("index-status")?)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        response.json().await.map_err(map_body)
    }

    async fn open_item(&self, id: &str, provider: Provider) -> Result<(), BackendError> {
        let response = self
            .client
            .post(self.endpoint("open")?)
            .json(&json!({ "id": id, "provider": provider.wire_name() }))
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::Status(status.as_u16()));
        }
        Ok(())
    }
}

fn map_transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

fn map_body(err: reqwest::Error) -> BackendError {
    if err.is_decode() {
        BackendError::Malformed(err.to_string())
    } else {
        BackendError::Transport(err.to_string())
    }
}
