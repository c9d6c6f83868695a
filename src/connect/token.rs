//! API token creation
//!
//! Both account APIs authenticate with a short-lived ES256 JWT signed by
//! the account's `.p8` private key. The mode only changes the host and the
//! token audience.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::fs;

use crate::config::{AuthMode, Credentials, KeySource};
use crate::error::{AuditError, Result};

const STANDARD_API_BASE: &str = "https://api.appstoreconnect.apple.com";
const ENTERPRISE_API_BASE: &str = "https://api.enterprise.developer.apple.com";
const STANDARD_AUDIENCE: &str = "appstoreconnect-v1";
const ENTERPRISE_AUDIENCE: &str = "apple-developer-enterprise-v1";

// Apple caps API tokens at 20 minutes
const TOKEN_LIFETIME_SECS: i64 = 1200;

pub fn api_base(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Standard => STANDARD_API_BASE,
        AuthMode::Enterprise => ENTERPRISE_API_BASE,
    }
}

pub fn audience(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Standard => STANDARD_AUDIENCE,
        AuthMode::Enterprise => ENTERPRISE_AUDIENCE,
    }
}

#[derive(Serialize)]
struct Claims {
    iss: String,
    iat: i64,
    exp: i64,
    aud: &'static str,
}

/// A signed bearer token bound to the mode it was created for.
pub struct ConnectToken {
    pub bearer: String,
    pub mode: AuthMode,
}

/// Sign a token for the given mode from the resolved credentials.
///
/// Missing key material fails here, inside the fetch attempt, rather than
/// during credential resolution.
pub fn create_token(credentials: &Credentials, mode: AuthMode) -> Result<ConnectToken> {
    let key_id = credentials.key_id.as_deref().ok_or_else(|| {
        AuditError::Token("no API key id: pass --api-key-id or set ASC_KEY_ID".to_string())
    })?;
    let issuer_id = credentials.issuer_id.as_deref().ok_or_else(|| {
        AuditError::Token("no issuer id: pass --api-issuer-id or set ASC_ISSUER_ID".to_string())
    })?;

    let key_pem = match &credentials.key_source {
        Some(KeySource::File(path)) => fs::read(path).map_err(|e| {
            AuditError::Token(format!("failed to read key file {}: {e}", path.display()))
        })?,
        Some(KeySource::Inline(content)) => content.clone().into_bytes(),
        None => {
            return Err(AuditError::Token(
                "no API key available: pass --api-key-file or --api-key-stdin, set ASC_KEY_FILE, \
                 or place AuthKey_<key_id>.p8 in the working directory"
                    .to_string(),
            ))
        }
    };

    let now = Utc::now().timestamp();
    let claims = Claims {
        iss: issuer_id.to_string(),
        iat: now,
        exp: now + TOKEN_LIFETIME_SECS,
        aud: audience(mode),
    };

    let mut header = Header::new(Algorithm::ES256);
    header.kid = Some(key_id.to_string());

    let encoding_key = EncodingKey::from_ec_pem(&key_pem)?;
    let bearer = encode(&header, &claims, &encoding_key)?;

    Ok(ConnectToken { bearer, mode })
}
