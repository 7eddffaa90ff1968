//! Syntactic checks on labels and targets. None of these mutate their input; the apex
//! marker `@` passes every check.

use std::net::Ipv4Addr;

use crate::dns_record::APEX;
use crate::errors::SyntaxError;

/// A relative label must not be mistaken for an absolute name.
pub fn assert_no_trailing_dot(name: &str) -> Result<(), SyntaxError> {
    if name != APEX && name.ends_with('.') {
        return Err(SyntaxError::TrailingDot(name.to_string()));
    }
    Ok(())
}

pub fn assert_no_underscore(name: &str) -> Result<(), SyntaxError> {
    if name != APEX && name.contains('_') {
        return Err(SyntaxError::Underscore(name.to_string()));
    }
    Ok(())
}

/// Exactly four decimal octets; no prefix length, no IPv6.
pub fn assert_valid_ipv4(address: &str) -> Result<Ipv4Addr, SyntaxError> {
    address
        .parse::<Ipv4Addr>()
        .map_err(|_| SyntaxError::InvalidIpv4(address.to_string()))
}

/// `foo.bar` is rejected: it could be relative to the zone or an absolute name missing its dot.
pub fn assert_valid_target(target: &str) -> Result<(), SyntaxError> {
    if target == APEX || !target.contains('.') || target.ends_with('.') {
        return Ok(());
    }
    Err(SyntaxError::AmbiguousTarget(target.to_string()))
}
