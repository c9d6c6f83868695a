//! The audit pipeline: record normalization, status classification,
//! and the filter/sort stage that produces the final report rows.

pub mod classify;
pub mod filtering;
pub mod normalize;

pub use classify::{statuses_for, type_class_for, Status, TypeClass};
pub use filtering::{apply, AssetKind, SelectionCriteria};
pub use normalize::{normalize, normalize_all};
