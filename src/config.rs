//! Calculator settings: constants plus `IPCALC_*` environment overrides.
//!
//! `main` loads a `.env` file with `dotenv` first, so the same variables can
//! live there.

use crate::output::OutputFormat;
use crate::{CalcOptions, MaskPolicy, MissingMask, ValidationStrategy};
use colored::Colorize;
use std::str::FromStr;

/// Prefix shared by every environment variable read here.
pub const ENV_PREFIX: &str = "IPCALC_";

/// Shown when the address field does not validate.
pub const INVALID_ADDRESS_MESSAGE: &str = "Invalid IP Address";
/// Shown when the mask field is malformed or rejected.
pub const INVALID_MASK_MESSAGE: &str = "Invalid Subnet Mask";

/// Effective settings for one run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub validation: ValidationStrategy,
    pub mask_policy: MaskPolicy,
    pub missing_mask: MissingMask,
    pub output: OutputFormat,
}

impl Config {
    /// Read `IPCALC_*` variables from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unknown values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        Config {
            validation: read_var(&lookup, "VALIDATION", defaults.validation),
            mask_policy: read_var(&lookup, "MASK_POLICY", defaults.mask_policy),
            missing_mask: read_var(&lookup, "MISSING_MASK", defaults.missing_mask),
            output: read_var(&lookup, "OUTPUT", defaults.output),
        }
    }

    /// The parts that steer the calculation itself.
    pub fn calc_options(&self) -> CalcOptions {
        CalcOptions {
            strategy: self.validation,
            mask_policy: self.mask_policy,
            missing_mask: self.missing_mask,
        }
    }
}

fn read_var<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr<Err = String> + std::fmt::Display,
{
    let key = format!("{ENV_PREFIX}{name}");
    match lookup(&key) {
        None => default,
        Some(raw) => match raw.parse() {
            Ok(value) => {
                log::debug!("config {key}={value}");
                value
            }
            Err(e) => {
                log::warn!(
                    "{key}: {e}, using default {default}",
                    key = key.on_blue()
                );
                default
            }
        },
    }
}
