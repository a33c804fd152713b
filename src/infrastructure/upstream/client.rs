//! Reqwest-backed implementation of the employee store port.
//!
//! This is the only place transport failures are classified into
//! `StoreError`; everything above re-raises them unchanged. The client does
//! not retry and does not throttle: upstream rate limiting surfaces
//! immediately as a failure of the caller's operation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::wire::{CreateEmployeeBody, DeleteByNameBody, Envelope, EnvelopeStatus, WireEmployee};
use crate::domain::errors::{StoreError, StoreResult};
use crate::domain::models::{Employee, NewEmployee, UpstreamConfig};
use crate::domain::ports::EmployeeStore;

/// Configuration for the upstream HTTP client.
#[derive(Debug, Clone)]
pub struct UpstreamClientConfig {
    /// Base URL of the employee store.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8112".to_string(),
            timeout_secs: 30,
        }
    }
}

impl From<&UpstreamConfig> for UpstreamClientConfig {
    fn from(config: &UpstreamConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }
}

/// HTTP client for the remote employee store.
pub struct RemoteEmployeeStore {
    http_client: ReqwestClient,
    base_url: String,
}

impl RemoteEmployeeStore {
    /// Create a new client with connection pooling and a request timeout.
    pub fn new(config: UpstreamClientConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn employee_url(&self) -> String {
        format!("{}/api/v1/employee", self.base_url)
    }

    /// Read a response into an envelope, classifying HTTP failures.
    async fn read_envelope<T: DeserializeOwned>(
        response: Response,
    ) -> StoreResult<Envelope<T>> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_string());
            warn!(%status, "upstream returned a failure status");
            return Err(classify_failure(status, body));
        }

        response
            .json::<Envelope<T>>()
            .await
            .map_err(|err| StoreError::Decode(err.to_string()))
    }

    /// Unwrap an envelope, treating an error-tagged one as a failure even
    /// though the transport call succeeded.
    fn unwrap_envelope<T>(envelope: Envelope<T>) -> StoreResult<Option<T>> {
        if envelope.status == EnvelopeStatus::Error {
            let message = envelope
                .error
                .unwrap_or_else(|| "upstream reported failure".to_string());
            return Err(StoreError::Rejected(message));
        }
        Ok(envelope.data)
    }
}

#[async_trait]
impl EmployeeStore for RemoteEmployeeStore {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> StoreResult<Vec<Employee>> {
        debug!("GET {}", self.employee_url());
        let response = self
            .http_client
            .get(self.employee_url())
            .send()
            .await
            .map_err(transport_error)?;

        let envelope = Self::read_envelope::<Vec<WireEmployee>>(response).await?;
        let employees = Self::unwrap_envelope(envelope)?
            .unwrap_or_default()
            .into_iter()
            .map(Employee::from)
            .collect();
        Ok(employees)
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, id: Uuid) -> StoreResult<Employee> {
        let url = format!("{}/{id}", self.employee_url());
        debug!("GET {url}");
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        // The store answers 404 for unknown ids; everything else goes
        // through the shared classification.
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id));
        }

        let envelope = Self::read_envelope::<WireEmployee>(response).await?;
        match Self::unwrap_envelope(envelope)? {
            Some(wire) => Ok(Employee::from(wire)),
            None => Err(StoreError::NotFound(id)),
        }
    }

    #[instrument(skip(self, payload), fields(name = %payload.name))]
    async fn create(&self, payload: &NewEmployee) -> StoreResult<Employee> {
        debug!("POST {}", self.employee_url());
        let response = self
            .http_client
            .post(self.employee_url())
            .json(&CreateEmployeeBody::from(payload))
            .send()
            .await
            .map_err(transport_error)?;

        let envelope = Self::read_envelope::<WireEmployee>(response).await?;
        match Self::unwrap_envelope(envelope)? {
            Some(wire) => Ok(Employee::from(wire)),
            None => Err(StoreError::Decode(
                "create response carried no employee payload".to_string(),
            )),
        }
    }

    #[instrument(skip(self))]
    async fn delete_by_name(&self, name: &str) -> StoreResult<bool> {
        debug!("DELETE {}", self.employee_url());
        let response = self
            .http_client
            .delete(self.employee_url())
            .json(&DeleteByNameBody {
                name: name.to_string(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        let envelope = Self::read_envelope::<bool>(response).await?;
        // Absent data means upstream did not delete anything.
        Ok(Self::unwrap_envelope(envelope)?.unwrap_or(false))
    }
}

/// Classify an HTTP failure status.
///
/// 429 is its own variant so the rate-limit condition stays visible in
/// logs, but like every non-404 failure it is surfaced to callers as an
/// internal error, never retried here.
fn classify_failure(status: StatusCode, body: String) -> StoreError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        StoreError::RateLimited
    } else {
        StoreError::Server {
            status: status.as_u16(),
            body,
        }
    }
}

/// Map a transport-level reqwest failure.
fn transport_error(err: reqwest::Error) -> StoreError {
    StoreError::Transport(err.to_string())
}
