//! Network, broadcast and host count from an address and a mask.

use crate::models::{broadcast_addr, network_addr, usable_hosts, SubnetMask, SubnetResult};
use std::net::Ipv4Addr;

/// Apply `mask` to `address`.
///
/// Pure bit arithmetic; any four octets are accepted as a mask, so scattered
/// masks still give `network & !mask == 0` and `broadcast & mask == address & mask`.
///
/// # Examples
/// ```
/// use ip_calculator::calc::compute_from_mask;
/// use ip_calculator::models::SubnetMask;
/// use std::net::Ipv4Addr;
///
/// let r = compute_from_mask(
///     Ipv4Addr::new(10, 0, 0, 5),
///     SubnetMask::from_prefix(30).unwrap(),
/// );
/// assert_eq!(r.network, Ipv4Addr::new(10, 0, 0, 4));
/// assert_eq!(r.broadcast, Ipv4Addr::new(10, 0, 0, 7));
/// assert_eq!(r.usable_hosts, 2);
/// ```
pub fn compute_from_mask(address: Ipv4Addr, mask: SubnetMask) -> SubnetResult {
    let host_bits = mask.host_bits();
    SubnetResult {
        address,
        mask,
        network: network_addr(address, mask),
        broadcast: broadcast_addr(address, mask),
        host_bits,
        usable_hosts: usable_hosts(host_bits),
    }
}

/// Historical default mask for the address class, `None` for class D and E.
///
/// Class A (`0..=127`) is `/8`, B (`128..=191`) is `/16`, C (`192..=223`) is `/24`.
pub fn classful_mask(address: Ipv4Addr) -> Option<SubnetMask> {
    let prefix = match address.octets()[0] {
        0..=127 => 8,
        128..=191 => 16,
        192..=223 => 24,
        _ => return None,
    };
    SubnetMask::from_prefix(prefix)
}
