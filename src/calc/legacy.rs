//! Compatibility mode where the address doubles as its own mask.
//!
//! Older calculators took a single address field and reused its octets as the
//! mask. The result is only meaningful when the address is itself a valid
//! mask; it is reachable only through [`MissingMask::LegacySelfMask`](crate::MissingMask).

use super::compute_from_mask;
use crate::models::{SubnetMask, SubnetResult};
use std::net::Ipv4Addr;

/// Treat `address` as its own mask.
///
/// The network is always `address` and the broadcast is always
/// `255.255.255.255`; host bits are the zero bits of the address.
pub fn compute_from_self_mask(address: Ipv4Addr) -> SubnetResult {
    compute_from_mask(address, SubnetMask::new_unchecked(address))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_mask_shape() {
        let ip = Ipv4Addr::new(192, 168, 1, 10);
        let r = compute_from_self_mask(ip);
        assert_eq!(r.network, ip);
        assert_eq!(r.broadcast, Ipv4Addr::BROADCAST);
        assert_eq!(r.mask.addr(), ip);
        // 192.168.1.10 has 2 + 3 + 1 + 2 set bits
        assert_eq!(r.host_bits, 24);
        assert_eq!(r.usable_hosts, 16777214);
    }

    #[test]
    fn test_self_mask_on_real_mask() {
        let ip = Ipv4Addr::new(255, 255, 255, 0);
        let r = compute_from_self_mask(ip);
        assert_eq!(r.host_bits, 8);
        assert_eq!(r.usable_hosts, 254);
    }

    #[test]
    fn test_self_mask_all_ones_floors_at_zero() {
        let r = compute_from_self_mask(Ipv4Addr::BROADCAST);
        assert_eq!(r.host_bits, 0);
        assert_eq!(r.usable_hosts, 0);
    }
}
