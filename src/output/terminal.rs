//! Terminal output utilities.
//!
//! Provides padding helpers shared by the text and CSV renderers.

use colored::Colorize;

/// Width of the label column in text output.
pub const LABEL_WIDTH: usize = 19;

/// Quote `value` and right-align it in a CSV column `width` wide.
///
/// Values that do not fit keep their full text; the row just gets wider.
pub fn quoted_cell(value: &str, width: usize) -> String {
    format!("{:>width$}", format!("\"{value}\""))
}

/// Format `label:` left-aligned to [`LABEL_WIDTH`], in bold.
pub fn format_label(label: &str) -> String {
    let with_colon = format!("{label}:");
    format!("{with_colon:<width$}", width = LABEL_WIDTH).bold().to_string()
}
