use crate::app_config::Config;
use async_trait::async_trait;
use mawqif_booking::wire::{BookingPayload, BookingRecord};
use mawqif_booking::{BookingError, BookingGateway, BookingRequest, Ticket};
use mawqif_catalog::normalize::site_from_record;
use mawqif_catalog::{CatalogError, Site, SiteId, SiteSource};
use reqwest::StatusCode;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// HTTP client for the booking backend.
///
/// Implements both data-source traits; wire one `ApiClient` into the form
/// for real traffic, or the fixture implementations for offline work.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

pub(crate) struct DeadlineExceeded;

/// Bounded wait around one transport step.
pub(crate) async fn with_deadline<F: Future>(
    limit: Duration,
    fut: F,
) -> Result<F::Output, DeadlineExceeded> {
    tokio::time::timeout(limit, fut)
        .await
        .map_err(|_| DeadlineExceeded)
}

/// The catalog endpoint returns a JSON array of raw records; anything else
/// is a format error, never a silent coercion.
fn sites_from_body(body: &Value) -> Result<Vec<Site>, CatalogError> {
    let records = body
        .as_array()
        .ok_or_else(|| CatalogError::Format("expected a JSON array of site records".to_string()))?;
    Ok(records.iter().map(site_from_record).collect())
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.api.timeout_seconds),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_value(&self, path: &str) -> Result<(StatusCode, Value), CatalogError> {
        let url = self.url(path);
        tracing::debug!(%url, "catalog request");

        let response = with_deadline(self.timeout, self.http.get(&url).send())
            .await
            .map_err(|_| CatalogError::Timeout)?
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // Callers that care (fetch_site) map this; skip body parsing.
            return Ok((status, Value::Null));
        }
        if !status.is_success() {
            return Err(CatalogError::Network(format!("backend returned {}", status)));
        }

        let body = with_deadline(self.timeout, response.json::<Value>())
            .await
            .map_err(|_| CatalogError::Timeout)?
            .map_err(|e| CatalogError::Format(e.to_string()))?;

        Ok((status, body))
    }
}

#[async_trait]
impl SiteSource for ApiClient {
    async fn fetch_sites(&self) -> Result<Vec<Site>, CatalogError> {
        let (_, body) = self.get_value("Site/leaves").await?;
        let sites = sites_from_body(&body)?;
        tracing::info!(count = sites.len(), "site catalog fetched");
        Ok(sites)
    }

    async fn fetch_site(&self, id: &SiteId) -> Result<Site, CatalogError> {
        let (status, body) = self.get_value(&format!("Site/{}", id)).await?;
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        Ok(site_from_record(&body))
    }
}

#[async_trait]
impl BookingGateway for ApiClient {
    async fn submit(&self, request: &BookingRequest) -> Result<Ticket, BookingError> {
        let url = self.url("booking");
        let payload = BookingPayload::from(request);
        tracing::info!(site = %request.site.id, hours = request.hours, "submitting booking");

        let response = with_deadline(self.timeout, self.http.post(&url).json(&payload).send())
            .await
            .map_err(|_| BookingError::Server("booking request timed out".to_string()))?
            .map_err(|e| BookingError::Server(e.to_string()))?
            .error_for_status()
            .map_err(|e| BookingError::Server(e.to_string()))?;

        let record = with_deadline(self.timeout, response.json::<BookingRecord>())
            .await
            .map_err(|_| BookingError::Server("booking request timed out".to_string()))?
            .map_err(|e| BookingError::Server(e.to_string()))?;

        Ok(Ticket::assemble(record, request))
    }
}
