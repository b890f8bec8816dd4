//! Integration tests for ip-calculator
//!
//! These tests drive the public validate/calculate contract end to end.

use ip_calculator::output::{render, OutputFormat};
use ip_calculator::state::CalculatorState;
use ip_calculator::validate::parse_address_with;
use ip_calculator::{
    calculate, calculate_with, validate, CalcOptions, InvalidInput, MaskPolicy, SubnetResult,
    ValidationStrategy,
};
use std::net::Ipv4Addr;

const STRATEGIES: [ValidationStrategy; 2] = [ValidationStrategy::Regex, ValidationStrategy::Split];

fn options(strategy: ValidationStrategy) -> CalcOptions {
    CalcOptions {
        strategy,
        ..Default::default()
    }
}

#[test]
fn test_rejected_inputs() {
    for text in ["256.1.1.1", "1.1.1", "1.1.1.1.1", "", "a.b.c.d", "1.1.1.-1"] {
        assert!(!validate(text), "'{text}' should not validate");
        for strategy in STRATEGIES {
            assert!(parse_address_with(text, strategy).is_err());
            assert!(matches!(
                calculate_with(text, Some("255.255.255.0"), &options(strategy)),
                Err(InvalidInput::Address(_))
            ));
        }
    }
}

#[test]
fn test_class_c_example() {
    for strategy in STRATEGIES {
        let r = calculate_with("192.168.1.10", Some("255.255.255.0"), &options(strategy))
            .expect("valid input");
        assert_eq!(r.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(r.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(r.usable_hosts, 254);
    }
}

#[test]
fn test_slash_30_example() {
    let r = calculate("10.0.0.5", Some("255.255.255.252")).expect("valid input");
    assert_eq!(r.network, Ipv4Addr::new(10, 0, 0, 4));
    assert_eq!(r.broadcast, Ipv4Addr::new(10, 0, 0, 7));
    assert_eq!(r.usable_hosts, 2);
}

#[test]
fn test_host_count_never_negative() {
    let r = calculate("10.0.0.5", Some("255.255.255.255")).expect("valid input");
    assert_eq!(r.host_bits, 0);
    assert_eq!(r.usable_hosts, 0);

    let r = calculate("10.0.0.5", Some("255.255.255.254")).expect("valid input");
    assert_eq!(r.host_bits, 1);
    assert_eq!(r.usable_hosts, 0);
}

#[test]
fn test_idempotent() {
    let first = calculate("172.16.33.200", Some("255.255.240.0"));
    let second = calculate("172.16.33.200", Some("255.255.240.0"));
    assert_eq!(first, second);
}

#[test]
fn test_bit_identities_over_sweep() {
    let permissive = CalcOptions {
        mask_policy: MaskPolicy::Permissive,
        ..Default::default()
    };
    for a in (0..=255u16).step_by(37) {
        for m in (0..=255u16).step_by(29) {
            let address = format!("{a}.{}.{}.{}", 255 - a, a / 2, (a * 7) % 256);
            let mask = format!("255.{m}.{}.{}", 255 - m, m / 3);
            let r: SubnetResult =
                calculate_with(&address, Some(&mask), &permissive).expect("valid input");
            let address = r.address.octets();
            let mask = r.mask.addr().octets();
            let network = r.network.octets();
            let broadcast = r.broadcast.octets();
            for i in 0..4 {
                assert_eq!(network[i] & !mask[i], 0);
                assert_eq!(broadcast[i] & mask[i], address[i] & mask[i]);
            }
        }
    }
}

#[test]
fn test_state_round() {
    let mut state = CalculatorState::new();
    state.set_address("192.168.1.10");
    state.set_mask(Some("255.255.255.0"));
    assert!(state.can_calculate(&options(ValidationStrategy::Split)));
    let r = state.submit(&options(ValidationStrategy::Split)).expect("valid input");
    assert_eq!(state.hosts, "254");

    state.set_address("192.168.1");
    for strategy in STRATEGIES {
        assert!(!state.can_calculate(&options(strategy)));
        assert!(state.submit(&options(strategy)).is_err());
    }
    assert_eq!(state.network, "");
    assert_eq!(state.notification.as_deref(), Some("Invalid IP Address"));

    let json = render(&r, OutputFormat::Json).expect("serializable");
    let json: serde_json::Value = serde_json::from_str(&json).expect("parsable");
    assert_eq!(json["network"], r.network.to_string());
    assert_eq!(json["broadcast"], r.broadcast.to_string());
    assert_eq!(json["usable_hosts"], r.usable_hosts);
}
