//! Dual-mode fetch orchestration
//!
//! Fetches certificates and profiles using the credentials' primary mode.
//! Any failure in standard mode triggers exactly one transparent retry of
//! the whole fetch against the enterprise API; only the retry's error is
//! surfaced. Forcing enterprise mode makes that the single attempt.

pub mod client;
pub mod token;

use std::future::Future;

use tracing::debug;

use crate::audit::{AssetKind, SelectionCriteria};
use crate::config::{AuthMode, Credentials};
use crate::error::Result;
use crate::models::ApiResource;

pub use client::ConnectClient;
pub use token::{create_token, ConnectToken};

/// Raw records from one successful fetch, in API order.
#[derive(Debug, Default)]
pub struct FetchedAssets {
    pub certificates: Vec<ApiResource>,
    pub profiles: Vec<ApiResource>,
}

/// Fetch the selected asset kinds, falling back from standard to
/// enterprise mode on any failure. Skipped kinds come back empty without a
/// request being made.
pub async fn fetch_assets(
    credentials: &Credentials,
    criteria: &SelectionCriteria,
) -> Result<FetchedAssets> {
    with_mode_fallback(credentials.mode, |mode| {
        fetch_in_mode(credentials, mode, criteria)
    })
    .await
}

/// Run `attempt` in the primary mode, retrying once in enterprise mode
/// when the primary mode was standard. The first error is deliberately not
/// inspected: authentication, network, and decoding failures all trigger
/// the same fallback.
pub async fn with_mode_fallback<T, F, Fut>(primary: AuthMode, attempt: F) -> Result<T>
where
    F: Fn(AuthMode) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match attempt(primary).await {
        Ok(value) => Ok(value),
        Err(first) if primary == AuthMode::Standard => {
            debug!("standard-mode fetch failed, retrying via the enterprise API: {first}");
            attempt(AuthMode::Enterprise).await
        }
        Err(err) => Err(err),
    }
}

async fn fetch_in_mode(
    credentials: &Credentials,
    mode: AuthMode,
    criteria: &SelectionCriteria,
) -> Result<FetchedAssets> {
    let token = token::create_token(credentials, mode)?;
    let client = ConnectClient::new(token)?;

    // The two kinds are independent reads against the same token.
    let (certificates, profiles) = tokio::try_join!(
        fetch_kind(&client, AssetKind::Certificates, criteria),
        fetch_kind(&client, AssetKind::Profiles, criteria),
    )?;

    Ok(FetchedAssets {
        certificates,
        profiles,
    })
}

async fn fetch_kind(
    client: &ConnectClient,
    kind: AssetKind,
    criteria: &SelectionCriteria,
) -> Result<Vec<ApiResource>> {
    if !criteria.includes_asset(kind) {
        return Ok(Vec::new());
    }
    match kind {
        AssetKind::Certificates => client.list_certificates().await,
        AssetKind::Profiles => client.list_profiles().await,
    }
}
