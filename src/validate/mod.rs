//! Address and mask text validation.
//!
//! Two interchangeable strategies accept exactly the same inputs:
//! - [`ValidationStrategy::Regex`] - one anchored expression bounding each octet
//! - [`ValidationStrategy::Split`] - split on `.` then check every segment

mod pattern;
mod split;

use crate::error::InvalidFormat;
use crate::models::SubnetMask;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// How dotted-quad text is checked.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    #[default]
    Regex,
    Split,
}

impl FromStr for ValidationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "regex" => Ok(ValidationStrategy::Regex),
            "split" => Ok(ValidationStrategy::Split),
            other => Err(format!("unknown validation strategy '{other}'")),
        }
    }
}

impl std::fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValidationStrategy::Regex => write!(f, "regex"),
            ValidationStrategy::Split => write!(f, "split"),
        }
    }
}

/// Parse an address with the default strategy.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, InvalidFormat> {
    parse_address_with(text, ValidationStrategy::default())
}

/// Parse an address with an explicit strategy.
pub fn parse_address_with(
    text: &str,
    strategy: ValidationStrategy,
) -> Result<Ipv4Addr, InvalidFormat> {
    let parsed = match strategy {
        ValidationStrategy::Regex => pattern::parse(text),
        ValidationStrategy::Split => split::parse(text),
    };
    parsed.ok_or_else(|| InvalidFormat::new(text))
}

/// Parse a mask; contiguity is not checked here.
pub fn parse_mask_with(
    text: &str,
    strategy: ValidationStrategy,
) -> Result<SubnetMask, InvalidFormat> {
    parse_address_with(text, strategy).map(SubnetMask::new_unchecked)
}

/// True iff [`parse_address_with`] would succeed.
pub fn is_valid_address(text: &str, strategy: ValidationStrategy) -> bool {
    match strategy {
        ValidationStrategy::Regex => pattern::is_match(text),
        ValidationStrategy::Split => split::parse(text).is_some(),
    }
}
