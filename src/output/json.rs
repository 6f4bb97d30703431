//! JSON rendering of split results.

use crate::models::Ipv4;

/// Render subnets as a JSON array of CIDR strings.
pub fn subnets_to_json(subnets: &[Ipv4]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(subnets)
}
