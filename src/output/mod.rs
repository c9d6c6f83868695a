//! Report rendering
//!
//! Two formats: pretty-printed JSON and colored terminal tables. Both
//! consume the pipeline's filtered rows and add no decision logic beyond
//! presentation.

pub mod json;
pub mod tables;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Section header above each rendered table
pub fn section_title(title: &str) -> String {
    style(format!("━━━ {title} ━━━")).cyan().bold().to_string()
}

/// Create a spinner for long-running operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}
