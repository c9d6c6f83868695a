//! Table rendering using comfy-table
//!
//! One titled table per included asset kind with a fixed column set.
//! Expired and invalid rows are marked red, expiring-soon rows yellow.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, ContentArrangement, Table};

use crate::audit::classify::INVALID_STATE;
use crate::audit::{AssetKind, SelectionCriteria};
use crate::models::NormalizedRow;
use crate::output::section_title;
use crate::utils::time;

/// Fields humanized as dates in table cells
const DATE_FIELDS: &[&str] = &["created_date", "expiration_date"];

const CERTIFICATE_COLUMNS: &[&str] = &[
    "display_name",
    "type",
    "platform",
    "expiration_date",
    "days_until_expiration",
];

const PROFILE_COLUMNS: &[&str] = &[
    "name",
    "profile_type",
    "platform",
    "profile_state",
    "expiration_date",
    "days_until_expiration",
];

/// Render one table per included asset kind, separated by a blank line.
pub fn render(
    certificate_rows: &[NormalizedRow],
    profile_rows: &[NormalizedRow],
    criteria: &SelectionCriteria,
    now: DateTime<Utc>,
) -> String {
    let mut sections = Vec::new();
    if criteria.includes_asset(AssetKind::Certificates) {
        sections.push(certificate_table(certificate_rows, now));
    }
    if criteria.includes_asset(AssetKind::Profiles) {
        sections.push(profile_table(profile_rows, now));
    }
    sections.join("\n\n")
}

fn certificate_table(rows: &[NormalizedRow], now: DateTime<Utc>) -> String {
    // Certificates are ordered here, at render time; the filter engine
    // leaves their sequence untouched.
    let mut sorted: Vec<&NormalizedRow> = rows.iter().collect();
    sorted.sort_by_key(|row| time::sort_key_by_expiration(row));

    let mut table = new_table(CERTIFICATE_COLUMNS);
    for row in sorted {
        let color = row_color(row, now);
        let cells = CERTIFICATE_COLUMNS.iter().map(|&column| {
            let text = match column {
                "days_until_expiration" => days_cell(row, now),
                "type" => certificate_type_label(row).unwrap_or_default(),
                _ => attribute_cell(row, column),
            };
            colored_cell(text, color)
        });
        table.add_row(cells.collect::<Vec<_>>());
    }

    format!("{}\n{table}", section_title("Certificates"))
}

fn profile_table(rows: &[NormalizedRow], now: DateTime<Utc>) -> String {
    let mut table = new_table(PROFILE_COLUMNS);
    for row in rows {
        let color = row_color(row, now);
        let invalid = row.get_str("profile_state") == Some(INVALID_STATE);
        let cells = PROFILE_COLUMNS.iter().map(|&column| {
            let text = match column {
                "days_until_expiration" => days_cell(row, now),
                _ => attribute_cell(row, column),
            };
            // An invalid state is marked red even when the row itself is
            // not expired or expiring.
            if column == "profile_state" && invalid {
                colored_cell(text, Some(Color::Red))
            } else {
                colored_cell(text, color)
            }
        });
        table.add_row(cells.collect::<Vec<_>>());
    }

    format!("{}\n{table}", section_title("Profiles"))
}

fn new_table(columns: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        columns
            .iter()
            .map(|&column| {
                Cell::new(column)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            })
            .collect::<Vec<_>>(),
    );
    table
}

fn attribute_cell(row: &NormalizedRow, column: &str) -> String {
    row.get(column)
        .map(|value| time::display_value(column, value, DATE_FIELDS))
        .unwrap_or_default()
}

fn days_cell(row: &NormalizedRow, now: DateTime<Utc>) -> String {
    time::days_until_expiration(row, now)
        .map(|days| days.to_string())
        .unwrap_or_default()
}

fn row_color(row: &NormalizedRow, now: DateTime<Utc>) -> Option<Color> {
    if time::is_expired(row, now) {
        Some(Color::Red)
    } else if time::is_expiring_soon(row, now, crate::audit::classify::EXPIRING_WINDOW_DAYS) {
        Some(Color::Yellow)
    } else {
        None
    }
}

fn colored_cell(text: String, color: Option<Color>) -> Cell {
    let cell = Cell::new(text);
    match color {
        Some(color) if console::colors_enabled() => cell.fg(color),
        _ => cell,
    }
}

/// Certificate type label derived from the record's name: the part of
/// `name` leading up to `display_name`, else the text before the first
/// `:` or `-` separator.
fn certificate_type_label(row: &NormalizedRow) -> Option<String> {
    let name = row.get_str("name").unwrap_or_default();
    if name.is_empty() {
        return None;
    }

    let display_name = row.get_str("display_name").unwrap_or_default();
    if !display_name.is_empty() {
        if let Some(prefix) = name.strip_suffix(display_name) {
            let prefix = prefix.trim_end_matches(|c: char| c.is_whitespace() || c == ':' || c == '-');
            if !prefix.is_empty() {
                return Some(prefix.to_string());
            }
        }
    }

    let head = name
        .splitn(2, [':', '-'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_string();
    Some(head)
}
