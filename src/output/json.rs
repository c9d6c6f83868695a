//! JSON output formatter

use serde_json::{Map, Value};

use crate::audit::{AssetKind, SelectionCriteria};
use crate::error::Result;
use crate::models::NormalizedRow;

/// Serialize the filtered rows as a pretty-printed object. The
/// `certificates` and `profiles` keys are present only for included asset
/// kinds; each holds the rows in final pipeline order.
pub fn render(
    certificate_rows: &[NormalizedRow],
    profile_rows: &[NormalizedRow],
    criteria: &SelectionCriteria,
) -> Result<String> {
    let mut payload = Map::new();
    if criteria.includes_asset(AssetKind::Certificates) {
        payload.insert(
            "certificates".to_string(),
            serde_json::to_value(certificate_rows)?,
        );
    }
    if criteria.includes_asset(AssetKind::Profiles) {
        payload.insert("profiles".to_string(), serde_json::to_value(profile_rows)?);
    }

    Ok(serde_json::to_string_pretty(&Value::Object(payload))?)
}
