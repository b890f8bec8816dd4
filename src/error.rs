//! Error types returned by the calculator.
//!
//! Parsing a single dotted-quad fails with [`InvalidFormat`]. The
//! [`calculate`](crate::calculate) boundary folds every failure into
//! [`InvalidInput`], which never carries a partial result.

use crate::models::SubnetMask;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Text is not a dotted-quad of four decimal octets in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid dotted-quad IPv4 value")]
pub struct InvalidFormat {
    /// The rejected text, as given.
    pub input: String,
}

impl InvalidFormat {
    pub(crate) fn new(input: &str) -> Self {
        InvalidFormat {
            input: input.to_string(),
        }
    }
}

/// Why a calculation request could not produce a [`SubnetResult`](crate::models::SubnetResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid address: {0}")]
    Address(InvalidFormat),
    #[error("invalid subnet mask: {0}")]
    Mask(InvalidFormat),
    #[error("subnet mask {0} is not a contiguous run of 1-bits")]
    NonContiguousMask(SubnetMask),
    #[error("no classful default mask for {0}")]
    NoDefaultMask(Ipv4Addr),
}

impl InvalidInput {
    /// True when the address (not the mask) was at fault.
    pub fn is_address_error(&self) -> bool {
        matches!(self, InvalidInput::Address(_) | InvalidInput::NoDefaultMask(_))
    }
}
