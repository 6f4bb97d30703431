//! Subnet splitting logic.
//!
//! This module contains the split algorithms:
//! - [`shift`] - uniform power-of-two splitting
//! - [`count`] - count-driven splitting with round-up
//! - [`divide`] - offset-aware lazy enumeration
//!
//! The first two materialize their result; [`divide`] hands out an
//! iterator and computes one subnet per pull.

mod count;
mod divide;
mod shift;

// Re-export public functions
pub use count::subnet_into;
pub use divide::{subnet_divide, SubnetRange, MAX_DIVIDE_BITS};
pub use shift::subnet_shift;
