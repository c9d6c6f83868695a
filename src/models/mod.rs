//! Data types flowing through the audit pipeline

pub mod record;

pub use record::{ApiResource, NormalizedRow, RecordAttributes};
