//! Output formatting for subnet results.
//!
//! This module renders a [`SubnetResult`] for the terminal:
//! - [`text`] - labelled lines with binary forms
//! - [`csv`] - header plus one quoted row
//! - JSON via `serde_json`

mod csv;
mod terminal;
mod text;

use crate::models::SubnetResult;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::str::FromStr;

pub use csv::{csv_header, csv_row};
pub use terminal::{format_label, quoted_cell};

/// Output format selected by config or command line.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Render `result` in `format`.
pub fn render(result: &SubnetResult, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let out = match format {
        OutputFormat::Text => text::render(result),
        OutputFormat::Csv => csv::render(result),
        OutputFormat::Json => serde_json::to_string_pretty(result)
            .map_err(|e| format!("Error serializing JSON: {e}"))?,
    };
    Ok(out)
}
