//! Subnet arithmetic.
//!
//! - [`subnet`] - canonical calculation from an address and a mask
//! - [`legacy`] - address-as-its-own-mask compatibility mode

mod legacy;
mod subnet;

// Re-export public functions
pub use legacy::compute_from_self_mask;
pub use subnet::{classful_mask, compute_from_mask};
