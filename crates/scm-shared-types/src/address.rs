//! Address value types used by the interface schemas
//!
//! Wire payloads carry addresses as plain strings; these types exist so that
//! validators parse them once instead of pattern-matching by hand.

use std::net::IpAddr;
use std::str::FromStr;

use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use mac_address::MacAddress;

use crate::error::ValidationError;

/// An IP address with an optional prefix length, e.g. `10.0.0.1` or
/// `10.0.0.1/24`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpAddress {
    pub addr: IpAddr,
    pub prefix_len: Option<u8>,
}

impl IpAddress {
    pub fn new(addr: IpAddr, prefix_len: Option<u8>) -> Self {
        Self { addr, prefix_len }
    }

    pub fn is_prefixed(&self) -> bool {
        self.prefix_len.is_some()
    }

    pub fn to_ipnet(&self) -> Option<IpNet> {
        self.prefix_len.and_then(|prefix| match self.addr {
            IpAddr::V4(addr) => Ipv4Net::new(addr, prefix).ok().map(IpNet::V4),
            IpAddr::V6(addr) => Ipv6Net::new(addr, prefix).ok().map(IpNet::V6),
        })
    }
}

impl FromStr for IpAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || ValidationError::Unsupported {
            field: "ip_address".to_string(),
            value: s.to_string(),
        };

        if let Some((addr, prefix)) = s.split_once('/') {
            let addr = addr.parse::<IpAddr>().map_err(|_| unsupported())?;
            let prefix_len = prefix.parse::<u8>().map_err(|_| unsupported())?;
            // Reject out-of-range prefixes (/33 on v4, /129 on v6).
            let valid = match addr {
                IpAddr::V4(v4) => Ipv4Net::new(v4, prefix_len).is_ok(),
                IpAddr::V6(v6) => Ipv6Net::new(v6, prefix_len).is_ok(),
            };
            if !valid {
                return Err(unsupported());
            }
            Ok(IpAddress::new(addr, Some(prefix_len)))
        } else {
            let addr = s.parse::<IpAddr>().map_err(|_| unsupported())?;
            Ok(IpAddress::new(addr, None))
        }
    }
}

impl std::fmt::Display for IpAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = self.prefix_len {
            write!(f, "{}/{}", self.addr, prefix)
        } else {
            write!(f, "{}", self.addr)
        }
    }
}

/// Hardware address for ARP entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacAddr(pub MacAddress);

impl FromStr for MacAddr {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<MacAddress>()
            .map(MacAddr)
            .map_err(|_| ValidationError::Unsupported {
                field: "hw_address".to_string(),
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for MacAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_ip() {
        let ip: IpAddress = "192.168.1.10".parse().unwrap();
        assert_eq!(ip.prefix_len, None);
        assert!(!ip.is_prefixed());
        assert_eq!(ip.to_string(), "192.168.1.10");
    }

    #[test]
    fn parse_prefixed_ip() {
        let ip: IpAddress = "192.168.1.10/24".parse().unwrap();
        assert_eq!(ip.prefix_len, Some(24));
        assert!(ip.to_ipnet().is_some());
        assert_eq!(ip.to_string(), "192.168.1.10/24");
    }

    #[test]
    fn reject_bad_prefix() {
        assert!("192.168.1.10/33".parse::<IpAddress>().is_err());
        assert!("2001:db8::1/129".parse::<IpAddress>().is_err());
        assert!("not-an-ip".parse::<IpAddress>().is_err());
    }

    #[test]
    fn parse_mac() {
        let mac: MacAddr = "aa:bb:cc:dd:ee:ff".parse().unwrap();
        assert!(mac.to_string().eq_ignore_ascii_case("aa:bb:cc:dd:ee:ff"));
        assert!("aa:bb:cc".parse::<MacAddr>().is_err());
    }
}
