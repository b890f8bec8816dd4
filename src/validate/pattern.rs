//! Dotted-quad parsing with a single anchored regular expression.

use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

/// One octet, `0..=255`, no sign and no leading zero.
const OCTET: &str = r"(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])";

lazy_static! {
    static ref RE: Regex = Regex::new(&format!(r"^{o}\.{o}\.{o}\.{o}$", o = OCTET))
        .expect("Invalid Regex?");
}

/// True when `text` is a dotted-quad address.
pub fn is_match(text: &str) -> bool {
    RE.is_match(text)
}

/// Parse `text` into an address, `None` when it does not match.
pub fn parse(text: &str) -> Option<Ipv4Addr> {
    let caps = RE.captures(text)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octet_bounds() {
        assert_eq!(parse("0.0.0.0"), Some(Ipv4Addr::new(0, 0, 0, 0)));
        assert_eq!(
            parse("255.255.255.255"),
            Some(Ipv4Addr::new(255, 255, 255, 255))
        );
        assert_eq!(parse("199.249.250.9"), Some(Ipv4Addr::new(199, 249, 250, 9)));
        assert_eq!(parse("256.0.0.0"), None);
        assert_eq!(parse("0.0.0.260"), None);
    }

    #[test]
    fn test_anchored() {
        assert!(is_match("10.0.0.1"));
        assert!(!is_match("x10.0.0.1"));
        assert!(!is_match("10.0.0.1x"));
        assert!(!is_match("10.0.0.1\n"));
        assert!(!is_match("10.0.0.1.10.0.0.1"));
    }

    #[test]
    fn test_no_leading_zero() {
        assert!(!is_match("10.0.0.01"));
        assert!(!is_match("010.0.0.1"));
        assert!(!is_match("10.00.0.1"));
    }
}
