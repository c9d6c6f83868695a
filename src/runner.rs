//! Audit pipeline orchestration
//!
//! Wires the stages together for one invocation: resolve credentials,
//! build the selection criteria, fetch with mode fallback, normalize,
//! filter and sort, render. Configuration errors surface before any
//! network call is attempted.

use std::collections::BTreeSet;
use std::io::{self, Read};

use chrono::Utc;

use crate::audit::{self, AssetKind, SelectionCriteria};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::{self, CredentialOverrides, Credentials, EnvCredentials};
use crate::connect;
use crate::error::{AuditError, Result};
use crate::output;

/// Run the full audit and print the report to stdout.
pub async fn run_audit(cli: Cli) -> Result<()> {
    let criteria = build_criteria(&cli)?;

    let overrides = CredentialOverrides {
        key_id: cli.api_key_id.clone(),
        issuer_id: cli.api_issuer_id.clone(),
        key_file: cli.api_key_file.clone(),
        key_stdin: cli.api_key_stdin,
        in_house: cli.in_house,
    };
    let env = EnvCredentials::from_process();
    let search_dir = std::env::current_dir()?;
    let credentials = Credentials::resolve(overrides, &env, &search_dir, read_stdin)?;

    let spinner = output::create_spinner("Fetching signing assets...");
    let fetched = connect::fetch_assets(&credentials, &criteria).await;
    spinner.finish_and_clear();
    let fetched = fetched?;

    let certificate_rows = audit::normalize_all(&fetched.certificates);
    let profile_rows = audit::normalize_all(&fetched.profiles);

    let now = Utc::now();
    let (certificate_rows, profile_rows) =
        audit::apply(certificate_rows, profile_rows, &criteria, now);

    let report = match cli.output_format() {
        OutputFormat::Json => output::json::render(&certificate_rows, &profile_rows, &criteria)?,
        OutputFormat::Table => {
            output::tables::render(&certificate_rows, &profile_rows, &criteria, now)
        }
    };
    println!("{report}");

    Ok(())
}

/// Build the selection criteria from the filter flags and the asset
/// subcommand. The `certificates`/`profiles` subcommands are sugar for a
/// single-asset inclusion set and may not be combined with `--assets`.
pub fn build_criteria(cli: &Cli) -> Result<SelectionCriteria> {
    let statuses = cli
        .status
        .as_deref()
        .map(config::parse_statuses)
        .transpose()?;
    let types = cli
        .type_filter
        .as_deref()
        .map(config::parse_types)
        .transpose()?;
    let assets_flag = cli.assets.as_deref().map(config::parse_assets).transpose()?;

    let assets = match (&cli.command, assets_flag) {
        (Some(Commands::Certificates | Commands::Profiles), Some(_)) => {
            return Err(AuditError::Config(
                "--assets cannot be combined with the certificates/profiles subcommands"
                    .to_string(),
            ))
        }
        (Some(Commands::Certificates), None) => Some(BTreeSet::from([AssetKind::Certificates])),
        (Some(Commands::Profiles), None) => Some(BTreeSet::from([AssetKind::Profiles])),
        (_, flag) => flag,
    };

    Ok(SelectionCriteria {
        statuses,
        types,
        assets,
    })
}

fn read_stdin() -> io::Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}
