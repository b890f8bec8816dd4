//! Presentation state for an interactive front-end.
//!
//! [`CalculatorState`] holds what a calculator screen shows: the two input
//! fields, the three result fields and a transient notification. It is
//! updated only from the value [`calculate_with`](crate::calculate_with)
//! returns, so the calculation itself never touches it.

use crate::config::{INVALID_ADDRESS_MESSAGE, INVALID_MASK_MESSAGE};
use crate::{CalcOptions, InvalidInput, SubnetResult};
use colored::Colorize;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub address: String,
    pub mask: Option<String>,
    pub network: String,
    pub broadcast: String,
    pub hosts: String,
    pub notification: Option<String>,
}

impl CalculatorState {
    pub fn new() -> CalculatorState {
        CalculatorState::default()
    }

    pub fn set_address(&mut self, text: &str) {
        self.address = text.to_string();
    }

    /// Empty text counts as no mask.
    pub fn set_mask(&mut self, text: Option<&str>) {
        self.mask = text.filter(|t| !t.is_empty()).map(str::to_string);
    }

    /// Gate for the calculate action, checked with the same strategy
    /// [`submit`](Self::submit) will use.
    pub fn can_calculate(&self, options: &CalcOptions) -> bool {
        crate::validate::is_valid_address(&self.address, options.strategy)
    }

    /// Run a calculation on the current inputs and show the outcome.
    pub fn submit(&mut self, options: &CalcOptions) -> Result<SubnetResult, InvalidInput> {
        let outcome = crate::calculate_with(&self.address, self.mask.as_deref(), options);
        self.apply(&outcome);
        outcome
    }

    /// Mirror `outcome` into the display fields.
    pub fn apply(&mut self, outcome: &Result<SubnetResult, InvalidInput>) {
        match outcome {
            Ok(result) => {
                log::debug!(
                    "calculated {addr} -> {network} / {broadcast}",
                    addr = result.address,
                    network = result.network.to_string().green(),
                    broadcast = result.broadcast
                );
                self.network = result.network.to_string();
                self.broadcast = result.broadcast.to_string();
                self.hosts = result.usable_hosts.to_string();
                self.notification = None;
            }
            Err(e) => {
                log::info!("rejected input: {}", e.to_string().red());
                self.clear();
                let message = if e.is_address_error() {
                    INVALID_ADDRESS_MESSAGE
                } else {
                    INVALID_MASK_MESSAGE
                };
                self.notification = Some(message.to_string());
            }
        }
    }

    /// Blank the result fields and any notification.
    pub fn clear(&mut self) {
        self.network.clear();
        self.broadcast.clear();
        self.hosts.clear();
        self.notification = None;
    }
}
