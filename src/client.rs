//! HTTP client used by the probes


use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};

/// HTTP client trait for abstraction and testing
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Execute a GET request with its own timeout
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse>;

    /// POST a JSON body with its own timeout
    async fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> Result<HttpResponse>;
}

/// HTTP response with the measured round-trip time
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
    /// Time from sending the request to receiving the full body
    pub elapsed: Duration,
}

impl HttpResponse {
    /// Check for exactly 200 OK
    pub fn is_ok(&self) -> bool {
        self.status_code == 200
    }

    /// Parse the body as JSON
    pub fn json(&self) -> Result<Value> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// `HttpClient` backed by a shared reqwest connection pool
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Create a new client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", crate::PKG_NAME, crate::VERSION))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    async fn send(&self, request: reqwest::RequestBuilder, timeout: Duration) -> Result<HttpResponse> {
        let start = Instant::now();
        let response = request.timeout(timeout).send().await?;
        let status_code = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status_code,
            body,
            elapsed: start.elapsed(),
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse> {
        self.send(self.client.get(url), timeout).await
    }

    async fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> Result<HttpResponse> {
        self.send(self.client.post(url).json(body), timeout).await
    }
}
