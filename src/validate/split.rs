//! Dotted-quad parsing by splitting on `.` and range-checking each segment.

use std::net::Ipv4Addr;

/// Parse `text` into an address, `None` on any malformed segment.
pub fn parse(text: &str) -> Option<Ipv4Addr> {
    let segments: Vec<&str> = text.split('.').collect();
    if segments.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        *octet = parse_octet(segment)?;
    }
    Some(Ipv4Addr::from(octets))
}

fn parse_octet(segment: &str) -> Option<u8> {
    // u8::from_str would take a '+' sign, so check digits by hand first
    if segment.is_empty() || segment.len() > 3 {
        return None;
    }
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octet() {
        assert_eq!(parse_octet("0"), Some(0));
        assert_eq!(parse_octet("9"), Some(9));
        assert_eq!(parse_octet("99"), Some(99));
        assert_eq!(parse_octet("255"), Some(255));
        assert_eq!(parse_octet("256"), None);
        assert_eq!(parse_octet("999"), None);
        assert_eq!(parse_octet("1000"), None);
        assert_eq!(parse_octet(""), None);
        assert_eq!(parse_octet("+1"), None);
        assert_eq!(parse_octet("-1"), None);
        assert_eq!(parse_octet("01"), None);
        assert_eq!(parse_octet("00"), None);
        assert_eq!(parse_octet(" 1"), None);
        assert_eq!(parse_octet("1a"), None);
    }

    #[test]
    fn test_parse_segments() {
        assert_eq!(parse("172.16.254.1"), Some(Ipv4Addr::new(172, 16, 254, 1)));
        assert_eq!(parse("172.16.254"), None);
        assert_eq!(parse("172.16.254.1."), None);
        assert_eq!(parse(".172.16.254.1"), None);
        assert_eq!(parse("172..254.1"), None);
    }
}
