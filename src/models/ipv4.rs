//! IPv4 subnet mask and address bit utilities.
//!
//! Provides [`SubnetMask`] for representing dotted-quad masks, along with
//! the bitwise helpers used to derive network and broadcast addresses.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// Returns `None` when `len` is longer than [`MAX_LENGTH`].
///
/// # Examples
/// ```
/// use ip_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        None
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Some(mask as u32)
    }
}

/// Clear every host bit of `addr`.
pub fn network_addr(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & mask.bits())
}

/// Set every host bit of `addr`.
pub fn broadcast_addr(addr: Ipv4Addr, mask: SubnetMask) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) | !mask.bits())
}

/// Render an address as four 8-bit padded binary groups.
///
/// ```
/// use ip_calculator::models::to_binary_string;
/// use std::net::Ipv4Addr;
/// assert_eq!(
///     to_binary_string(Ipv4Addr::new(192, 168, 1, 10)),
///     "11000000.10101000.00000001.00001010"
/// );
/// ```
pub fn to_binary_string(addr: Ipv4Addr) -> String {
    addr.octets()
        .iter()
        .map(|octet| format!("{octet:08b}"))
        .collect::<Vec<String>>()
        .join(".")
}

/// Dotted-quad subnet mask.
///
/// Any four octets are representable; [`SubnetMask::is_contiguous`] tells
/// whether the value is a proper prefix mask.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(Ipv4Addr);

impl SubnetMask {
    /// Wrap four octets without checking contiguity.
    pub fn new_unchecked(addr: Ipv4Addr) -> SubnetMask {
        SubnetMask(addr)
    }

    /// Build the contiguous mask for a prefix length in `0..=32`.
    pub fn from_prefix(len: u8) -> Option<SubnetMask> {
        get_cidr_mask(len).map(|bits| SubnetMask(Ipv4Addr::from(bits)))
    }

    /// The mask as a dotted-quad address.
    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    /// The mask as a 32-bit value.
    pub fn bits(&self) -> u32 {
        u32::from(self.0)
    }

    /// Number of set bits across all four octets.
    pub fn ones(&self) -> u32 {
        self.bits().count_ones()
    }

    /// Number of bits left for hosts, `32 - popcount`.
    pub fn host_bits(&self) -> u32 {
        MAX_LENGTH as u32 - self.ones()
    }

    /// True when no 1-bit follows a 0-bit.
    pub fn is_contiguous(&self) -> bool {
        // inverted prefix mask is 2^n - 1, so adding one clears every bit
        let wildcard = !self.bits();
        wildcard & wildcard.wrapping_add(1) == 0
    }

    /// Prefix length, only for contiguous masks.
    pub fn prefix_len(&self) -> Option<u8> {
        if self.is_contiguous() {
            Some(self.ones() as u8)
        } else {
            None
        }
    }

    /// The inverted mask (Cisco style wildcard).
    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.bits())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for SubnetMask {
    fn deserialize<D>(deserializer: D) -> Result<SubnetMask, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let addr = crate::validate::parse_address(&s)
            .map_err(|_| de::Error::custom(format!("invalid subnet mask: {}", s)))?;
        Ok(SubnetMask(addr))
    }
}

impl std::fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
