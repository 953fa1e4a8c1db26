use std::net::Ipv4Addr;

use thiserror::Error;

/// Errors that can occur while validating a dotted-quad address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddrError {
    /// Wrong number of dot-separated octets.
    #[error("'{0}' is not a dotted quad; expected four octets")]
    OctetCount(String),
    /// An octet is empty, non-decimal, or out of range.
    #[error("'{input}' has an invalid octet '{octet}'; each octet must be 0-255")]
    Octet { input: String, octet: String },
}

/// Validate and parse an IPv4 dotted quad.
///
/// Stricter than `Ipv4Addr::from_str` in its error reporting: wrong octet
/// counts and out-of-range octets are distinguished, and the offending
/// fragment is named.
pub fn parse_ipv4(input: &str) -> Result<Ipv4Addr, AddrError> {
    let trimmed = input.trim();
    let parts: Vec<&str> = trimmed.split('.').collect();
    if parts.len() != 4 {
        return Err(AddrError::OctetCount(input.to_string()));
    }

    let mut octets = [0u8; 4];
    for (slot, part) in octets.iter_mut().zip(&parts) {
        if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(AddrError::Octet {
                input: input.to_string(),
                octet: part.to_string(),
            });
        }
        *slot = part.parse().map_err(|_| AddrError::Octet {
            input: input.to_string(),
            octet: part.to_string(),
        })?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Derive the DHCP scope identifier for an address: first three octets, last zeroed.
pub fn scope_of(addr: Ipv4Addr) -> String {
    let [a, b, c, _] = addr.octets();
    format!("{a}.{b}.{c}.0")
}

/// Derive the reverse-lookup zone name for an address's /24.
pub fn reverse_zone_of(addr: Ipv4Addr) -> String {
    let [a, b, c, _] = addr.octets();
    format!("{c}.{b}.{a}.in-addr.arpa")
}
