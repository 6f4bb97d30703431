// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{SubnetError, SubnetResult};
pub use models::{codec, get_cidr_mask, Ipv4, MAX_LENGTH};
pub use processing::{subnet_divide, subnet_into, subnet_shift, SubnetRange, MAX_DIVIDE_BITS};

/// Parse a CIDR string and split it into `2^shift` equal subnets.
pub fn shift_cidr(cidr: &str, shift: u8) -> SubnetResult<Vec<Ipv4>> {
    log::info!("#Start shift_cidr({cidr}, {shift})");
    let network = Ipv4::new(cidr)?;
    subnet_shift(network, shift)
}

/// Parse a CIDR string and split it into at least `count` equal subnets.
pub fn into_cidr(cidr: &str, count: usize) -> SubnetResult<Vec<Ipv4>> {
    log::info!("#Start into_cidr({cidr}, {count})");
    let network = Ipv4::new(cidr)?;
    subnet_into(network, count)
}

/// Parse a CIDR string and lazily enumerate subnets from its address
/// through the end of the block.
pub fn divide_cidr(cidr: &str, bits: u8) -> SubnetResult<SubnetRange> {
    log::info!("#Start divide_cidr({cidr}, {bits})");
    let network = Ipv4::new(cidr)?;
    subnet_divide(network, bits)
}
