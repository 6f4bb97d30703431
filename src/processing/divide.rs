//! Offset-aware subnet enumeration.
//!
//! Divides a network by adding prefix bits, starting from the supplied
//! address rather than the network base. The address may have host bits
//! set under the original mask, as long as it lands exactly on a boundary
//! of the new, finer prefix. This provides an offset for resuming
//! enumeration partway through a block:
//!
//! `192.168.1.128/24` divided with 1 bit starts at `192.168.1.128/25`,
//! not `192.168.1.0/25`.

use std::net::Ipv4Addr;

use crate::error::SubnetError;
use crate::models::{codec, get_cidr_mask, Ipv4, MAX_LENGTH};

/// Most prefix bits that can be added while keeping two addresses per subnet.
pub const MAX_DIVIDE_BITS: u8 = 31;

/// Lazy sequence of subnets produced by [`subnet_divide`].
///
/// Yields blocks in ascending address order, from the supplied address
/// through the end of the original network, then stops. Enumeration is
/// forward-only; call [`subnet_divide`] again to restart.
#[derive(Debug, Clone)]
pub struct SubnetRange {
    // u64 so stepping past the last subnet cannot wrap at the 2^32 boundary.
    next: u64,
    last: u64,
    hosts: u64,
    mask: u8,
}

impl SubnetRange {
    /// Number of subnets left to yield.
    pub fn remaining(&self) -> u64 {
        if self.next > self.last {
            0
        } else {
            (self.last - self.next) / self.hosts + 1
        }
    }
}

impl Iterator for SubnetRange {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.next > self.last {
            return None;
        }
        let addr = Ipv4Addr::from(codec::split(self.next as u32));
        self.next += self.hosts;
        Some(Ipv4 {
            addr,
            mask: self.mask,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

/// Divide a network with the provided amount of additional prefix bits.
///
/// The enumeration runs from the network's address through the end of the
/// original block, so a base address yields the full set of children while
/// an offset (but aligned) address yields only the remaining ones.
///
/// # Arguments
/// * `network` - Anchor block; its address may be offset into the block
/// * `bits` - Prefix bits to add; each subnet keeps at least 2 addresses
///
/// # Returns
/// A [`SubnetRange`] over the remaining subnets. All validation runs here,
/// before the first subnet is produced:
/// * [`SubnetError::BitsOutOfRange`] - `bits` above 31
/// * [`SubnetError::PrefixOverflow`] - extended prefix above 31
/// * [`SubnetError::MisalignedAddress`] - address not on a new-prefix boundary
pub fn subnet_divide(network: Ipv4, bits: u8) -> Result<SubnetRange, SubnetError> {
    if bits > MAX_DIVIDE_BITS {
        return Err(SubnetError::BitsOutOfRange { bits });
    }
    let original_mask = get_cidr_mask(network.mask)?;
    let new_mask_len = network.mask + bits;
    if new_mask_len > MAX_DIVIDE_BITS {
        return Err(SubnetError::PrefixOverflow {
            prefix: network.mask,
            add: bits,
            limit: MAX_DIVIDE_BITS,
        });
    }

    let ip = u64::from(codec::merge(&network.addr.octets())?);
    let host_bits = MAX_LENGTH - new_mask_len;
    let hosts = 1u64 << host_bits;
    // The anchor itself must be a valid base address at the new prefix
    // length, whatever host bits it carries under the original mask.
    if ip & (hosts - 1) != 0 {
        return Err(SubnetError::MisalignedAddress {
            addr: network.addr,
            prefix: new_mask_len,
        });
    }

    let base_ip = ip & u64::from(original_mask);
    let total_subnets = 1u64 << bits;
    let total_hosts = total_subnets * hosts;
    let next_ip = base_ip + total_hosts;
    let last_ip = next_ip - hosts;
    log::debug!(
        "subnet_divide: {network} + {bits} bits -> /{new_mask_len}, {n} subnets from {addr}",
        n = (last_ip - ip) / hosts + 1,
        addr = network.addr,
    );

    Ok(SubnetRange {
        next: ip,
        last: last_ip,
        hosts,
        mask: new_mask_len,
    })
}
