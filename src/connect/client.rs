//! HTTP client for the asset-directory API
//!
//! Requests one collection at a time, following `links.next` until the
//! last page. Every non-success outcome collapses into a single fetch
//! failure; the orchestrator does not inspect error structure beyond the
//! human-readable message.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::connect::token::{api_base, ConnectToken};
use crate::error::{AuditError, Result};
use crate::models::ApiResource;

const PAGE_LIMIT: u32 = 200;

#[derive(Deserialize)]
struct PagedResponse {
    #[serde(default)]
    data: Vec<ApiResource>,
    #[serde(default)]
    links: PageLinks,
}

#[derive(Deserialize, Default)]
struct PageLinks {
    next: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    errors: Vec<ApiErrorDetail>,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    title: String,
    detail: Option<String>,
}

/// Authenticated session against one account API host.
pub struct ConnectClient {
    http: Client,
    token: ConnectToken,
}

impl ConnectClient {
    pub fn new(token: ConnectToken) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { http, token })
    }

    pub async fn list_certificates(&self) -> Result<Vec<ApiResource>> {
        self.list("/v1/certificates").await
    }

    pub async fn list_profiles(&self) -> Result<Vec<ApiResource>> {
        self.list("/v1/profiles").await
    }

    async fn list(&self, path: &str) -> Result<Vec<ApiResource>> {
        let mut url = format!("{}{}?limit={PAGE_LIMIT}", api_base(self.token.mode), path);
        let mut records = Vec::new();

        loop {
            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.token.bearer)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(AuditError::Fetch(describe_api_error(path, status, &body)));
            }

            let page: PagedResponse = response.json().await?;
            records.extend(page.data);

            match page.links.next {
                Some(next) => url = next,
                None => break,
            }
        }

        Ok(records)
    }
}

fn describe_api_error(path: &str, status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(error) = parsed.errors.first() {
            let detail = error.detail.as_deref().unwrap_or_default();
            return format!("GET {path} failed ({status}): {} {detail}", error.title);
        }
    }

    let hint = match status.as_u16() {
        401 => "authentication failed, check API credentials",
        403 => "permission denied, check the account role for this key",
        429 => "rate limited",
        _ => "request failed",
    };
    format!("GET {path} failed ({status}): {hint}")
}
