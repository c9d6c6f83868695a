//! Invocation configuration: credential resolution and filter selection

pub mod credentials;
pub mod selection;

pub use credentials::{AuthMode, CredentialOverrides, Credentials, EnvCredentials, KeySource};
pub use selection::{parse_assets, parse_statuses, parse_types};
