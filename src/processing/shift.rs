//! Uniform power-of-two subnet splitting.
//!
//! Lengthens a network's prefix by a fixed shift, yielding `2^shift`
//! equal-sized children that exactly cover the parent block.

use std::net::Ipv4Addr;

use crate::error::SubnetError;
use crate::models::{codec, get_cidr_mask, Ipv4, MAX_LENGTH};

/// Split a network into `2^shift` equal subnets by adding `shift` prefix bits.
///
/// The supplied address is normalized to its network base first. Children
/// are returned in ascending address order, each carrying the extended
/// prefix length.
///
/// # Arguments
/// * `network` - The block to split; host bits are masked off
/// * `shift` - Number of prefix bits to add
///
/// # Returns
/// `2^shift` blocks of prefix `mask + shift`, or
/// [`SubnetError::PrefixOverflow`] if that exceeds 32 bits.
pub fn subnet_shift(network: Ipv4, shift: u8) -> Result<Vec<Ipv4>, SubnetError> {
    let base = u64::from(network.value() & get_cidr_mask(network.mask)?);
    if u16::from(network.mask) + u16::from(shift) > u16::from(MAX_LENGTH) {
        return Err(SubnetError::PrefixOverflow {
            prefix: network.mask,
            add: shift,
            limit: MAX_LENGTH,
        });
    }
    if shift == 0 {
        return Ok(vec![Ipv4 {
            addr: Ipv4Addr::from(base as u32),
            mask: network.mask,
        }]);
    }

    let new_mask = network.mask + shift;
    // Per-child size and child count both need u64, a /0 block holds 2^32
    // addresses.
    let subnet_size = 1u64 << (MAX_LENGTH - new_mask);
    let count = 1u64 << shift;
    log::debug!("subnet_shift: {network} + {shift} bits -> {count} x /{new_mask}");

    let mut subnets = Vec::with_capacity(count as usize);
    for i in 0..count {
        subnets.push(Ipv4 {
            addr: Ipv4Addr::from(codec::split((base + i * subnet_size) as u32)),
            mask: new_mask,
        });
    }
    Ok(subnets)
}
