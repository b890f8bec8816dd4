//! Value types for subnet calculation.
//!
//! - [`SubnetMask`] - dotted-quad mask with bit queries
//! - [`SubnetResult`] - network, broadcast and host count of one calculation
//!
//! Addresses themselves are plain [`std::net::Ipv4Addr`] values built by
//! [`crate::validate`].

mod ipv4;
mod result;

// Re-export public types
pub use ipv4::{
    broadcast_addr, get_cidr_mask, network_addr, to_binary_string, SubnetMask, MAX_LENGTH,
};
pub use result::{total_addresses, usable_hosts, SubnetResult};
