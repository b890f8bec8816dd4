//! Command-line front-end.
//!
//! Flags override the [`Config`] read from the environment; the calculation
//! runs through a [`CalculatorState`] the same way a screen would drive it.

use crate::config::Config;
use crate::output::{self, OutputFormat};
use crate::state::CalculatorState;
use crate::{MaskPolicy, MissingMask, ValidationStrategy};
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::io::Write;

/// Exit code for a rejected address or mask.
pub const EXIT_INVALID_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "ip-calculator")]
#[command(about = "Network, broadcast and usable hosts for an IPv4 address.")]
pub struct CommandLine {
    /// IPv4 address, e.g. 192.168.1.10
    pub address: String,
    /// Subnet mask, e.g. 255.255.255.0 (classful default when omitted)
    pub mask: Option<String>,
    /// Output format: text, csv or json
    #[arg(long)]
    pub format: Option<OutputFormat>,
    /// Address validation: regex or split
    #[arg(long)]
    pub strategy: Option<ValidationStrategy>,
    /// Accept masks whose 1-bits are not contiguous
    #[arg(long)]
    pub permissive: bool,
    /// Without a mask, use the address as its own mask
    #[arg(long)]
    pub legacy_self_mask: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Layer the flags over `config`.
    pub fn merge(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.output = format;
        }
        if let Some(strategy) = self.strategy {
            config.validation = strategy;
        }
        if self.permissive {
            config.mask_policy = MaskPolicy::Permissive;
        }
        if self.legacy_self_mask {
            config.missing_mask = MissingMask::LegacySelfMask;
        }
        config
    }
}

/// Calculate once, print the result to `out` or the notification to `err`.
///
/// Returns the process exit code.
pub fn run<O: Write, E: Write>(
    args: &CommandLine,
    config: Config,
    out: &mut O,
    err: &mut E,
) -> Result<i32, Box<dyn Error>> {
    let config = args.merge(config);
    log::info!("#Start run() {config:?}");

    let mut state = CalculatorState::new();
    state.set_address(&args.address);
    state.set_mask(args.mask.as_deref());

    match state.submit(&config.calc_options()) {
        Ok(result) => {
            writeln!(out, "{}", output::render(&result, config.output)?)?;
            Ok(0)
        }
        Err(e) => {
            let message = state.notification.unwrap_or_default();
            writeln!(err, "{}: {}", message.on_red(), e)?;
            Ok(EXIT_INVALID_INPUT)
        }
    }
}
