//! CIDR and IP literal parsing utilities.
//!
//! Wraps [`ipnet::IpNet`] so the rest of the crate handles IPv4 and IPv6
//! networks uniformly. Parsing here is *strict*: a CIDR whose host bits are
//! set (e.g. `10.0.1.5/24`) is rejected, while a bare address literal is
//! accepted as a full-length prefix (`10.0.0.1` becomes `10.0.0.1/32`).

use crate::error::{Error, Result};
use ipnet::IpNet;
use std::net::IpAddr;
use std::str::FromStr;

/// Parse a single IP literal (v4 or v6).
pub fn parse_address(literal: &str) -> Result<IpAddr> {
    let literal = literal.trim();
    IpAddr::from_str(literal).map_err(|_| Error::InvalidAddress(literal.to_string()))
}

/// Parse a CIDR literal into a network, strictly.
///
/// Rules:
/// - `addr/prefix` with host bits clear parses as that network.
/// - `addr/prefix` with host bits set is [`Error::InvalidCidr`].
/// - a bare address parses as a full-length prefix (/32 or /128).
pub fn parse_cidr(literal: &str) -> Result<IpNet> {
    let literal = literal.trim();

    if !literal.contains('/') {
        let addr = IpAddr::from_str(literal)
            .map_err(|_| Error::InvalidCidr(literal.to_string()))?;
        return Ok(IpNet::from(addr));
    }

    let net =
        IpNet::from_str(literal).map_err(|_| Error::InvalidCidr(literal.to_string()))?;
    if net.addr() != net.network() {
        return Err(Error::InvalidCidr(format!("{literal} (host bits set)")));
    }
    Ok(net)
}

/// Parse a *stored* CIDR leniently: malformed data yields `None` so a scan
/// can skip the record instead of aborting.
pub fn parse_cidr_lenient(literal: &str) -> Option<IpNet> {
    parse_cidr(literal).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(
            parse_address("10.0.1.5").unwrap(),
            IpAddr::from([10, 0, 1, 5])
        );
        assert_eq!(
            parse_address(" 10.0.1.5 ").unwrap(),
            IpAddr::from([10, 0, 1, 5])
        );
        assert!(parse_address("::1").unwrap().is_ipv6());
        assert!(parse_address("10.0.1").is_err());
        assert!(parse_address("10.0.1.5/32").is_err());
        assert!(parse_address("not-an-ip").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn test_parse_cidr_valid() {
        let net = parse_cidr("10.0.0.0/16").unwrap();
        assert_eq!(net.prefix_len(), 16);
        assert!(net.contains(&parse_address("10.0.1.5").unwrap()));
        assert!(!net.contains(&parse_address("10.1.0.1").unwrap()));

        let v6 = parse_cidr("2001:db8::/32").unwrap();
        assert_eq!(v6.prefix_len(), 32);
        assert!(v6.contains(&parse_address("2001:db8::42").unwrap()));
    }

    #[test]
    fn test_parse_cidr_bare_address() {
        assert_eq!(parse_cidr("192.168.1.1").unwrap().prefix_len(), 32);
        assert_eq!(parse_cidr("::1").unwrap().prefix_len(), 128);
    }

    #[test]
    fn test_parse_cidr_host_bits_set() {
        assert!(parse_cidr("10.0.1.5/24").is_err());
        assert!(parse_cidr("10.0.0.0/24").is_ok());
        assert!(parse_cidr("2001:db8::1/32").is_err());
    }

    #[test]
    fn test_parse_cidr_malformed() {
        assert!(parse_cidr("10.0.0.0/33").is_err());
        assert!(parse_cidr("10.0.0/24").is_err());
        assert!(parse_cidr("banana").is_err());
        assert!(parse_cidr("10.0.0.0/24/7").is_err());
        assert!(parse_cidr_lenient("banana").is_none());
        assert!(parse_cidr_lenient("10.0.0.0/24").is_some());
    }
}
