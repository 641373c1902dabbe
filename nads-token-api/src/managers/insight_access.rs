use crate::errors::ProxyError;
use crate::utils::app_config::AppConfig;
use crate::utils::http_utils::with_client_id;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Outbound access to the thirdweb Insight API.
#[async_trait]
pub trait InsightAccess: Send + Sync {
    /// Issues a GET on `url` and decodes the JSON body. Non-2xx answers are errors.
    async fn get_json(&self, url: &str) -> Result<Value, ProxyError>;
}

#[async_trait]
impl InsightAccess for Client {
    async fn get_json(&self, url: &str) -> Result<Value, ProxyError> {
        let response = self
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            tracing::error!(
                status = status.as_u16(),
                reason = status.canonical_reason().unwrap_or_default(),
                body = %body,
                url,
                "Thirdweb API error"
            );
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Builds the HTTP client used for Insight requests.
pub fn insight_client(config: &AppConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
}

/// Fetches `url` once, authenticated with the thirdweb `client_id`.
pub async fn fetch_single_request<A: InsightAccess + ?Sized>(
    insight: &A,
    url: &str,
    client_id: Option<&str>,
) -> Result<Value, ProxyError> {
    let client_id = client_id
        .filter(|id| !id.is_empty())
        .ok_or(ProxyError::MissingClientId)?;

    let final_url = with_client_id(url, client_id);
    tracing::debug!(url = %final_url, "making Insight request");

    insight.get_json(&final_url).await
}

/// Scripted Insight answers, served in order. Once exhausted every page is empty.
#[cfg(test)]
pub struct MockInsight {
    responses: std::sync::Mutex<std::collections::VecDeque<Result<Value, ProxyError>>>,
    requested_urls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockInsight {
    pub fn new(responses: Vec<Result<Value, ProxyError>>) -> Self {
        Self {
            responses: std::sync::Mutex::new(responses.into()),
            requested_urls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Builds a mock answering each page with `{ "data": page }`.
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        Self::new(
            pages
                .into_iter()
                .map(|page| Ok(serde_json::json!({ "data": page })))
                .collect(),
        )
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested_urls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl InsightAccess for MockInsight {
    async fn get_json(&self, url: &str) -> Result<Value, ProxyError> {
        self.requested_urls.lock().unwrap().push(url.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(serde_json::json!({ "data": [] })))
    }
}
