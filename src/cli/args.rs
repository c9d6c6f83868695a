//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csa")]
#[command(version)]
#[command(about = "Audit App Store Connect signing certificates and provisioning profiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// App Store Connect API key id (falls back to ASC_KEY_ID)
    #[arg(long, global = true, value_name = "KEY_ID")]
    pub api_key_id: Option<String>,

    /// App Store Connect API issuer id (falls back to ASC_ISSUER_ID)
    #[arg(long, global = true, value_name = "ISSUER_ID")]
    pub api_issuer_id: Option<String>,

    /// Path to the .p8 API key file (falls back to ASC_KEY_FILE, then
    /// ./AuthKey_<key_id>.p8)
    #[arg(long, global = true, value_name = "PATH")]
    pub api_key_file: Option<PathBuf>,

    /// Read the API key contents from stdin
    #[arg(long, global = true)]
    pub api_key_stdin: bool,

    /// Authenticate against the enterprise account API only (no fallback)
    #[arg(long, global = true)]
    pub in_house: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true)]
    pub json: bool,

    /// Comma-separated status filters: expired, expiring_soon, invalid, ok
    #[arg(long, global = true, value_name = "STATUSES")]
    pub status: Option<String>,

    /// Comma-separated type filters: development, distribution
    #[arg(long = "type", global = true, value_name = "TYPES")]
    pub type_filter: Option<String>,

    /// Comma-separated asset kinds to include: certificates, profiles
    #[arg(long, global = true, value_name = "ASSETS")]
    pub assets: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Effective output format after the `--json` shorthand.
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show both certificates and profiles (default)
    List,

    /// Show only certificates
    Certificates,

    /// Show only profiles
    Profiles,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal tables (default)
    Table,
    /// Pretty-printed JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
