//! IPv4 subnet calculator.
//!
//! Turns an address and an optional subnet mask, both as text, into the
//! network address, broadcast address and usable-host count.
//!
//! - [`validate()`] - gate a calculate action on the address text
//! - [`calculate`] / [`calculate_with`] - run one calculation
//!
//! ```
//! let r = ip_calculator::calculate("192.168.1.10", Some("255.255.255.0")).unwrap();
//! assert_eq!(r.network.to_string(), "192.168.1.0");
//! assert_eq!(r.broadcast.to_string(), "192.168.1.255");
//! assert_eq!(r.usable_hosts, 254);
//! ```

pub mod calc;
pub mod cli;
pub mod config;
mod error;
pub mod models;
mod options;
pub mod output;
pub mod state;
pub mod validate;

pub use error::{InvalidFormat, InvalidInput};
pub use models::{SubnetMask, SubnetResult};
pub use options::{CalcOptions, MaskPolicy, MissingMask};
pub use validate::ValidationStrategy;

/// True iff `address` is a dotted-quad IPv4 address.
pub fn validate(address: &str) -> bool {
    validate::is_valid_address(address, ValidationStrategy::default())
}

/// Calculate with default [`CalcOptions`].
pub fn calculate(address: &str, mask: Option<&str>) -> Result<SubnetResult, InvalidInput> {
    calculate_with(address, mask, &CalcOptions::default())
}

/// Parse both fields, pick the mask and compute.
///
/// Without mask text, [`CalcOptions::missing_mask`] decides which mask is used.
pub fn calculate_with(
    address: &str,
    mask: Option<&str>,
    options: &CalcOptions,
) -> Result<SubnetResult, InvalidInput> {
    let address = validate::parse_address_with(address, options.strategy)
        .map_err(InvalidInput::Address)?;

    let mask = match mask {
        Some(text) => {
            validate::parse_mask_with(text, options.strategy).map_err(InvalidInput::Mask)?
        }
        None => match options.missing_mask {
            MissingMask::Classful => {
                calc::classful_mask(address).ok_or(InvalidInput::NoDefaultMask(address))?
            }
            MissingMask::LegacySelfMask => return Ok(calc::compute_from_self_mask(address)),
        },
    };

    if options.mask_policy == MaskPolicy::Strict && !mask.is_contiguous() {
        return Err(InvalidInput::NonContiguousMask(mask));
    }

    Ok(calc::compute_from_mask(address, mask))
}
