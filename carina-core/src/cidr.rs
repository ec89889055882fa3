//! IPv4 CIDR parsing, validity, and containment.
//!
//! Containment (see GLOSSARY): a parent's network bits, masked to the
//! parent's prefix length, must equal the child's network bits masked
//! the same way, and the parent's prefix length must be strictly less
//! than the child's (a parent of the same specificity never "contains"
//! a sibling, even an identical one).

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cidr {
    network: Ipv4Addr,
    prefix_len: u8,
}

impl Cidr {
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    fn network_bits(&self) -> u32 {
        let addr = u32::from(self.network);
        if self.prefix_len == 0 {
            0
        } else {
            addr & (u32::MAX << (32 - self.prefix_len))
        }
    }

    /// True when `self` (the parent) strictly contains `child`.
    pub fn contains(&self, child: &Cidr) -> bool {
        if self.prefix_len >= child.prefix_len {
            return false;
        }
        let mask = u32::MAX << (32 - self.prefix_len);
        (u32::from(child.network) & mask) == self.network_bits()
    }
}

impl FromStr for Cidr {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_part, prefix_part) = s
            .split_once('/')
            .ok_or_else(|| format!("'{s}' is not in CIDR notation (missing '/')"))?;
        let network: Ipv4Addr = addr_part
            .parse()
            .map_err(|_| format!("'{addr_part}' is not a valid IPv4 address"))?;
        let prefix_len: u8 = prefix_part
            .parse()
            .map_err(|_| format!("'{prefix_part}' is not a valid prefix length"))?;
        if prefix_len > 32 {
            return Err(format!("prefix length {prefix_len} exceeds 32"));
        }
        Ok(Self {
            network,
            prefix_len,
        })
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_cidr() {
        let cidr: Cidr = "10.0.0.0/16".parse().unwrap();
        assert_eq!(cidr.prefix_len(), 16);
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!("10.0.0.0".parse::<Cidr>().is_err());
    }

    #[test]
    fn rejects_invalid_octets() {
        assert!("10.0.0.256/16".parse::<Cidr>().is_err());
    }

    #[test]
    fn rejects_prefix_over_32() {
        assert!("10.0.0.0/33".parse::<Cidr>().is_err());
    }

    #[test]
    fn parent_contains_more_specific_child() {
        let vpc: Cidr = "10.0.0.0/16".parse().unwrap();
        let subnet: Cidr = "10.0.1.0/24".parse().unwrap();
        assert!(vpc.contains(&subnet));
    }

    #[test]
    fn sibling_same_prefix_len_does_not_contain() {
        let a: Cidr = "10.0.0.0/24".parse().unwrap();
        let b: Cidr = "10.0.0.0/24".parse().unwrap();
        assert!(!a.contains(&b));
    }

    #[test]
    fn unrelated_network_does_not_contain() {
        let vpc: Cidr = "10.0.0.0/16".parse().unwrap();
        let subnet: Cidr = "172.16.1.0/24".parse().unwrap();
        assert!(!vpc.contains(&subnet));
    }

    #[test]
    fn narrower_parent_prefix_required() {
        let a: Cidr = "10.0.1.0/24".parse().unwrap();
        let b: Cidr = "10.0.0.0/16".parse().unwrap();
        // a is more specific than b, so a cannot contain b
        assert!(!a.contains(&b));
    }

    #[test]
    fn display_round_trips() {
        let cidr: Cidr = "10.0.0.0/16".parse().unwrap();
        assert_eq!(cidr.to_string(), "10.0.0.0/16");
    }
}
