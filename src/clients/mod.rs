/// Classification backend client
use crate::domain::{Issue, Stats};
use crate::errors::{AcquisitionError, AcquisitionResult};
use crate::sources::LiveBackend;
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

pub const ANALYZE_PATH: &str = "/api/analyze";
pub const STATS_PATH: &str = "/api/stats";
pub const HEALTH_PATH: &str = "/api/health";

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> AcquisitionResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("civic-pulse/0.1")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    issues: Option<Vec<Issue>>,
}

#[derive(Debug, Deserialize)]
pub struct BackendHealth {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

/// Client for the analyze/stats/health endpoints
pub struct BackendClient {
    http_client: HttpClient,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String, timeout: Duration) -> AcquisitionResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Trigger analysis and return the classified issues
    pub async fn analyze(&self) -> AcquisitionResult<Vec<Issue>> {
        let resp = self
            .http_client
            .get_client()
            .post(self.url(ANALYZE_PATH))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body: AnalyzeResponse = match read_json(ANALYZE_PATH, resp).await {
            Ok(body) => body,
            // A failing backend still tends to send its JSON error body
            Err(AcquisitionError::Decode { .. }) if !status.is_success() => {
                return Err(backend_error(ANALYZE_PATH, status.as_u16(), None));
            }
            Err(e) => return Err(e),
        };

        if !status.is_success() || body.success == Some(false) {
            return Err(backend_error(ANALYZE_PATH, status.as_u16(), body.error));
        }

        body.issues.ok_or_else(|| AcquisitionError::Decode {
            endpoint: ANALYZE_PATH,
            message: "missing field `issues`".to_string(),
        })
    }

    /// Fetch the current aggregate statistics
    pub async fn fetch_stats(&self) -> AcquisitionResult<Stats> {
        let resp = self
            .http_client
            .get_client()
            .get(self.url(STATS_PATH))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(backend_error(STATS_PATH, status.as_u16(), None));
        }

        let body: Value = read_json(STATS_PATH, resp).await?;
        let Some(object) = body.as_object() else {
            return Err(AcquisitionError::Decode {
                endpoint: STATS_PATH,
                message: "expected a JSON object".to_string(),
            });
        };
        if object.get("success").and_then(Value::as_bool) == Some(false) {
            let message = object
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string);
            return Err(backend_error(STATS_PATH, status.as_u16(), message));
        }

        serde_json::from_value(body).map_err(|e| AcquisitionError::Decode {
            endpoint: STATS_PATH,
            message: e.to_string(),
        })
    }

    /// Probe backend liveness
    pub async fn health(&self) -> AcquisitionResult<BackendHealth> {
        let resp = self
            .http_client
            .get_client()
            .get(self.url(HEALTH_PATH))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(backend_error(HEALTH_PATH, resp.status().as_u16(), None));
        }

        read_json(HEALTH_PATH, resp).await
    }
}

#[async_trait]
impl LiveBackend for BackendClient {
    async fn analyze(&self) -> AcquisitionResult<Vec<Issue>> {
        BackendClient::analyze(self).await
    }

    async fn stats(&self) -> AcquisitionResult<Stats> {
        self.fetch_stats().await
    }
}

async fn read_json<T: DeserializeOwned>(
    endpoint: &'static str,
    resp: Response,
) -> AcquisitionResult<T> {
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| AcquisitionError::Decode {
        endpoint,
        message: e.to_string(),
    })
}

fn backend_error(endpoint: &'static str, status: u16, message: Option<String>) -> AcquisitionError {
    AcquisitionError::Backend {
        endpoint,
        status,
        message: message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "request failed".to_string()),
    }
}
