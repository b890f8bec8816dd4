//! Subnet calculation result.

use super::SubnetMask;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Outcome of one subnet calculation.
///
/// Serialize-only; every field past `mask` is derived from `address` and
/// `mask` by [`crate::calc`].
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubnetResult {
    /// The address the calculation started from.
    pub address: Ipv4Addr,
    /// The mask that was applied.
    pub mask: SubnetMask,
    /// Address with all host bits cleared.
    pub network: Ipv4Addr,
    /// Address with all host bits set.
    pub broadcast: Ipv4Addr,
    /// Bits not covered by the mask.
    pub host_bits: u32,
    /// `2^host_bits - 2`, never below zero.
    pub usable_hosts: u64,
}

/// Number of assignable hosts for `host_bits` host bits.
///
/// Network and broadcast addresses are excluded; `/31` and `/32` give 0.
pub fn usable_hosts(host_bits: u32) -> u64 {
    total_addresses(host_bits).saturating_sub(2)
}

/// Number of addresses covered by `host_bits` host bits.
pub fn total_addresses(host_bits: u32) -> u64 {
    1u64 << host_bits.min(super::MAX_LENGTH as u32)
}

impl SubnetResult {
    /// Addresses covered by the mask, network and broadcast included.
    pub fn total_addresses(&self) -> u64 {
        total_addresses(self.host_bits)
    }

    /// True when the hosts form one block between network and broadcast.
    fn has_host_block(&self) -> bool {
        self.usable_hosts > 0 && self.mask.is_contiguous()
    }

    /// First assignable host.
    ///
    /// `None` without usable hosts, and for scattered masks where the hosts
    /// are not one address block.
    pub fn first_host(&self) -> Option<Ipv4Addr> {
        if !self.has_host_block() {
            return None;
        }
        Some(Ipv4Addr::from(u32::from(self.network) + 1))
    }

    /// Last assignable host, `None` in the same cases as [`first_host`](Self::first_host).
    pub fn last_host(&self) -> Option<Ipv4Addr> {
        if !self.has_host_block() {
            return None;
        }
        Some(Ipv4Addr::from(u32::from(self.broadcast) - 1))
    }
}
