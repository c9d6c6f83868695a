//! Credential resolution
//!
//! Merges CLI flags, environment variables, and local key-file discovery
//! into one validated credential set. Precedence per field: explicit flag,
//! then environment variable, then (for the key file only) a conventional
//! `AuthKey_<key_id>.p8` in the working directory.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{AuditError, Result};

pub const ENV_KEY_ID: &str = "ASC_KEY_ID";
pub const ENV_ISSUER_ID: &str = "ASC_ISSUER_ID";
pub const ENV_KEY_FILE: &str = "ASC_KEY_FILE";

/// Which account API the credentials authenticate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// The primary account API
    Standard,
    /// The enterprise-style account API, also used transparently as the
    /// fallback when a standard-mode fetch fails
    Enterprise,
}

/// Where the private key content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    File(PathBuf),
    Inline(String),
}

/// Resolved credential set, immutable for the rest of the invocation.
///
/// Key material may legitimately be absent here; the fetch orchestrator
/// fails when it actually needs the key.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub key_id: Option<String>,
    pub issuer_id: Option<String>,
    pub key_source: Option<KeySource>,
    pub mode: AuthMode,
}

/// Credential values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub key_id: Option<String>,
    pub issuer_id: Option<String>,
    pub key_file: Option<PathBuf>,
    pub key_stdin: bool,
    pub in_house: bool,
}

/// Environment fallbacks, read once per invocation.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials {
    pub key_id: Option<String>,
    pub issuer_id: Option<String>,
    pub key_file: Option<PathBuf>,
}

impl EnvCredentials {
    pub fn from_process() -> Self {
        Self {
            key_id: non_empty_var(ENV_KEY_ID),
            issuer_id: non_empty_var(ENV_ISSUER_ID),
            key_file: non_empty_var(ENV_KEY_FILE).map(PathBuf::from),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl Credentials {
    /// Resolve credentials from flags and environment. `search_dir` is
    /// where the conventional default key file is probed; `read_stdin` is
    /// invoked at most once, and only when `--api-key-stdin` was given.
    pub fn resolve(
        overrides: CredentialOverrides,
        env: &EnvCredentials,
        search_dir: &Path,
        read_stdin: impl FnOnce() -> io::Result<String>,
    ) -> Result<Self> {
        let key_id = overrides.key_id.or_else(|| env.key_id.clone());
        let issuer_id = overrides.issuer_id.or_else(|| env.issuer_id.clone());
        let explicit_key_file = overrides.key_file.or_else(|| env.key_file.clone());

        let key_source = if overrides.key_stdin {
            if explicit_key_file.is_some() {
                return Err(AuditError::Config(format!(
                    "--api-key-stdin cannot be used with --api-key-file or {ENV_KEY_FILE}"
                )));
            }
            let content = read_stdin()?;
            if content.trim().is_empty() {
                return Err(AuditError::Config(
                    "--api-key-stdin was set, but stdin was empty".to_string(),
                ));
            }
            Some(KeySource::Inline(content))
        } else if let Some(path) = explicit_key_file {
            Some(KeySource::File(path))
        } else {
            default_key_file(search_dir, key_id.as_deref()).map(KeySource::File)
        };

        let mode = if overrides.in_house {
            AuthMode::Enterprise
        } else {
            AuthMode::Standard
        };

        Ok(Self {
            key_id,
            issuer_id,
            key_source,
            mode,
        })
    }
}

fn default_key_file(search_dir: &Path, key_id: Option<&str>) -> Option<PathBuf> {
    let key_id = key_id?;
    let candidate = search_dir.join(format!("AuthKey_{key_id}.p8"));
    candidate.is_file().then_some(candidate)
}
