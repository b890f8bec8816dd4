//! CSV output formatting for subnet results.

use super::terminal::quoted_cell;
use crate::models::SubnetResult;

/// Column names and widths, in output order.
const COLUMNS: [(&str, usize); 7] = [
    ("address", 17),
    ("mask", 17),
    ("prefix", 8),
    ("network", 17),
    ("broadcast", 17),
    ("host_bits", 11),
    ("hosts", 12),
];

/// Header line matching [`csv_row`].
pub fn csv_header() -> String {
    COLUMNS
        .iter()
        .map(|(name, width)| quoted_cell(name, *width))
        .collect::<Vec<String>>()
        .join(",")
}

/// One result as a CSV row of quoted, right-aligned fields.
pub fn csv_row(result: &SubnetResult) -> String {
    let prefix = result
        .mask
        .prefix_len()
        .map(|len| format!("/{len}"))
        .unwrap_or_else(|| "none".to_string());
    let values = [
        result.address.to_string(),
        result.mask.to_string(),
        prefix,
        result.network.to_string(),
        result.broadcast.to_string(),
        result.host_bits.to_string(),
        result.usable_hosts.to_string(),
    ];
    values
        .iter()
        .zip(COLUMNS.iter())
        .map(|(value, (_, width))| quoted_cell(value, *width))
        .collect::<Vec<String>>()
        .join(",")
}

/// Header plus one row.
pub fn render(result: &SubnetResult) -> String {
    format!("{}\n{}", csv_header(), csv_row(result))
}
