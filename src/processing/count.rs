//! Count-driven subnet splitting.

use crate::error::SubnetError;
use crate::models::{Ipv4, MAX_LENGTH};
use crate::processing::subnet_shift;

/// Split a network into at least `count` equal subnets.
///
/// Counts that are not a power of two round up to the next one, so the
/// result may hold more subnets than requested. Counts below 2 return the
/// block unchanged.
///
/// # Returns
/// The subnets from [`subnet_shift`] with the smallest sufficient shift,
/// or [`SubnetError::PrefixOverflow`] if that shift does not fit.
pub fn subnet_into(network: Ipv4, count: usize) -> Result<Vec<Ipv4>, SubnetError> {
    let mut shift: u8 = 0;
    while shift <= MAX_LENGTH && count as u64 > (1u64 << shift) {
        shift += 1;
    }
    if !count.is_power_of_two() && count > 1 {
        log::debug!("subnet_into: rounding {count} subnets up to {}", 1u64 << shift);
    }
    subnet_shift(network, shift)
}
