//! IPv4 CIDR block type and mask arithmetic.
//!
//! Provides the [`Ipv4`] struct pairing an address with its prefix length,
//! plus the mask helpers the splitters build on.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::SubnetError;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask value.
///
/// The degenerate `len == 0` case yields mask 0.
///
/// # Examples
/// ```
/// use subnet_divider::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// assert_eq!(get_cidr_mask(0).unwrap(), 0x00000000);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32, SubnetError> {
    if len > MAX_LENGTH {
        Err(SubnetError::PrefixOverflow {
            prefix: len,
            add: 0,
            limit: MAX_LENGTH,
        })
    } else {
        // Shift through a u64 so len == 0 does not overflow the u32 shift.
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// IPv4 address with CIDR prefix length.
///
/// The address may carry host bits; [`Ipv4::lo`] gives the network base.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address, possibly offset into the block.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub mask: u8,
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, SubnetError> {
        let addr_cidr = addr_cidr.trim();
        let invalid = || SubnetError::InvalidCidr {
            input: addr_cidr.to_string(),
        };
        let (addr, mask) = addr_cidr.split_once('/').ok_or_else(invalid)?;
        let addr: Ipv4Addr = addr.parse().map_err(|_| invalid())?;
        let mask: u8 = mask.parse().map_err(|_| invalid())?;
        if mask > MAX_LENGTH {
            return Err(invalid());
        }
        Ok(Ipv4 { addr, mask })
    }

    /// The address as its merged numeric value.
    pub fn value(&self) -> u32 {
        u32::from(self.addr)
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {self}: {e}"));
        Ipv4Addr::from(self.value() & mask)
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = get_cidr_mask(self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address for {self}: {e}"));
        Ipv4Addr::from(self.value() & mask | !mask)
    }

    /// Number of addresses covered by the block.
    pub fn num_hosts(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.min(MAX_LENGTH))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl FromStr for Ipv4 {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Ipv4, SubnetError> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}
