//! Input normalization for check targets.
//!
//! This module turns caller-supplied strings into the canonical forms the
//! probe compares and queries with:
//! - `normalize_ipv4()` - canonical dotted-quad `Ipv4Addr`
//! - `normalize_domain()` - lowercased, trimmed, without trailing dot
//! - `to_fqdn()` - absolute name used on the wire

use std::net::Ipv4Addr;

use crate::error_handling::InputError;

/// Normalizes a dotted-quad IPv4 string.
///
/// Surrounding whitespace is ignored and octets may carry leading zeros
/// (`192.000.002.010` becomes `192.0.2.10`). Anything other than four decimal
/// octets in `0..=255` is rejected.
///
/// # Errors
///
/// Returns `InputError::EmptyTargetIp` for a blank string and
/// `InputError::InvalidTargetIp` otherwise.
pub fn normalize_ipv4(input: &str) -> Result<Ipv4Addr, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyTargetIp);
    }
    if let Ok(ip) = trimmed.parse::<Ipv4Addr>() {
        return Ok(ip);
    }

    let invalid = || InputError::InvalidTargetIp(trimmed.to_string());
    let mut octets = [0u8; 4];
    let mut parts = trimmed.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse::<u8>().map_err(|_| invalid())?;
    }
    if parts.next().is_some() {
        return Err(invalid());
    }
    Ok(Ipv4Addr::from(octets))
}

/// Normalizes a domain name for display and comparison.
///
/// Trims whitespace, lowercases, and strips one trailing dot. Only the shape is
/// checked: the result must be non-empty.
///
/// # Errors
///
/// Returns `InputError::EmptyDomain` when nothing is left after trimming.
pub fn normalize_domain(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(InputError::EmptyDomain);
    }
    Ok(trimmed.to_lowercase())
}

/// Absolute form of `domain`, so no search suffix is ever appended.
pub fn to_fqdn(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{domain}.")
    }
}

#[cfg(test)]
mod tests;
