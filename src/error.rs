//! Error types for subnet division.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Validation failures raised by the split operations.
///
/// Every variant is a caller-input problem detected before any subnet is
/// produced; none are transient or retryable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubnetError {
    /// Address codec received other than 4 bytes.
    #[error("expected 4 address bytes, got {len}")]
    InvalidLength { len: usize },

    /// Requested additional bits exceed the subnettable maximum.
    #[error("{bits} exceeds the maximum amount of subnettable bits (31)")]
    BitsOutOfRange { bits: u8 },

    /// The extended prefix does not leave room for valid subnets.
    #[error("/{prefix} extended by {add} bits exceeds /{limit}")]
    PrefixOverflow { prefix: u8, add: u8, limit: u8 },

    /// The supplied address has host bits set below the new subnet boundary.
    #[error("{addr} has host bits set in /{prefix}")]
    MisalignedAddress { addr: Ipv4Addr, prefix: u8 },

    /// A CIDR string could not be parsed as `a.b.c.d/n`.
    #[error("invalid CIDR: {input}")]
    InvalidCidr { input: String },
}

/// Result type for subnet operations.
pub type SubnetResult<T> = Result<T, SubnetError>;
