//! Labelled, human readable output.

use super::terminal::format_label;
use crate::models::{to_binary_string, SubnetResult};
use colored::Colorize;
use std::net::Ipv4Addr;

/// Render one result as labelled lines, binary forms alongside.
pub fn render(result: &SubnetResult) -> String {
    let mask_note = match result.mask.prefix_len() {
        Some(len) => format!("/{len}"),
        None => "non-contiguous".to_string(),
    };
    let host_range = match (result.first_host(), result.last_host()) {
        (Some(first), Some(last)) => format!("{first} - {last}"),
        _ => "none".to_string(),
    };

    let lines = [
        addr_line("Address", result.address),
        format!(
            "{} {}",
            addr_line("Subnet Mask", result.mask.addr()),
            mask_note.yellow()
        ),
        format!("{}{}", format_label("Wildcard"), result.mask.wildcard()),
        addr_line("Network Address", result.network),
        addr_line("Broadcast Address", result.broadcast),
        format!("{}{}", format_label("Host Range"), host_range),
        format!(
            "{}{}",
            format_label("Hosts Available"),
            result.usable_hosts.to_string().green()
        ),
    ];
    lines.join("\n")
}

fn addr_line(label: &str, addr: Ipv4Addr) -> String {
    let padded = format!("{:<16}", addr.to_string());
    format!(
        "{}{}{}",
        format_label(label),
        padded.cyan(),
        to_binary_string(addr).dimmed()
    )
}
