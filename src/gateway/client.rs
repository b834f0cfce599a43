use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::gateway::error::GatewayError;
use crate::model::{RecordStatus, VaccineRecord};

/// Stateless adapter from record operations to backend HTTP calls.
///
/// Every call is independent: no retries, no caching, no local validation.
/// Overlapping calls for the same record are not ordered.
#[derive(Clone)]
pub struct RecordGateway {
    client: Client,
    base_url: String,
}

impl RecordGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = normalize_base_url(&config.base_url)?;
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.request_timeout_seconds.into()))
            .build()
            .map_err(|source| GatewayError::Connection {
                url: base_url.clone(),
                source,
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for a path below the base. An empty path is the base itself.
    pub fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// `POST /create`
    pub async fn create(&self, record: &VaccineRecord) -> Result<VaccineRecord, GatewayError> {
        let url = self.endpoint("create");
        self.send(&url, self.client.post(&url).json(record)).await
    }

    /// `PUT /{id}`
    pub async fn update(
        &self,
        id: i64,
        record: &VaccineRecord,
    ) -> Result<VaccineRecord, GatewayError> {
        let url = self.endpoint(&id.to_string());
        self.send(&url, self.client.put(&url).json(record)).await
    }

    /// `PATCH /{id}/inactivate`
    pub async fn deactivate(&self, id: i64) -> Result<VaccineRecord, GatewayError> {
        let url = self.endpoint(&format!("{id}/inactivate"));
        self.send(&url, self.client.patch(&url)).await
    }

    /// `PATCH /activate/{id}`
    pub async fn activate(&self, id: i64) -> Result<VaccineRecord, GatewayError> {
        let url = self.endpoint(&format!("activate/{id}"));
        self.send(&url, self.client.patch(&url)).await
    }

    /// `GET /{id}`; a 404 becomes [`GatewayError::NotFound`].
    pub async fn fetch_by_id(&self, id: i64) -> Result<VaccineRecord, GatewayError> {
        let url = self.endpoint(&id.to_string());
        match self.send(&url, self.client.get(&url)).await {
            Err(GatewayError::Status { status: 404, .. }) => Err(GatewayError::NotFound { id }),
            other => other,
        }
    }

    /// `GET /`
    pub async fn fetch_all(&self) -> Result<Vec<VaccineRecord>, GatewayError> {
        let url = self.endpoint("");
        self.send(&url, self.client.get(&url)).await
    }

    /// `GET /active/{status}`
    pub async fn fetch_by_status(
        &self,
        status: RecordStatus,
    ) -> Result<Vec<VaccineRecord>, GatewayError> {
        let url = self.endpoint(&format!("active/{}", status.code()));
        self.send(&url, self.client.get(&url)).await
    }

    async fn send<T>(&self, url: &str, request: RequestBuilder) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        tracing::debug!(url, "gateway request");
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::from_transport(url, e))?;
        handle_response(url, response).await
    }
}

/// Handles HTTP response, deserializing success or returning error
async fn handle_response<T>(url: &str, response: Response) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if status.is_success() {
        return response.json().await.map_err(|source| GatewayError::Decode {
            url: url.to_string(),
            source,
        });
    }

    let error = response.text().await.unwrap_or_default();
    let message = if error.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("No error details")
            .to_string()
    } else {
        error
    };
    tracing::warn!(url, status = status.as_u16(), "gateway request rejected");
    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

/// Trim whitespace and trailing slashes; require an http(s) URL with a host.
pub fn normalize_base_url(raw: &str) -> Result<String, GatewayError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let Some(rest) = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
    else {
        return Err(GatewayError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "expected an http:// or https:// URL".to_string(),
        });
    };
    if rest.is_empty() {
        return Err(GatewayError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: "missing host".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
