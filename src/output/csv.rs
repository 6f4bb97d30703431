//! CSV rendering of split results.

use itertools::Itertools;

use crate::models::Ipv4;

/// Header row matching [`subnet_csv_row`].
pub const CSV_HEADER: &str = r#""cnt","subnet_cidr","broadcast","addresses""#;

/// Render one subnet as a quoted CSV row.
pub fn subnet_csv_row(index: usize, subnet: &Ipv4) -> String {
    format!(
        r#""{cnt}","{subnet_cidr}","{broadcast}","{addresses}""#,
        cnt = index + 1,
        subnet_cidr = subnet,
        broadcast = subnet.hi(),
        addresses = subnet.num_hosts(),
    )
}

/// Render subnets as CSV, header included.
pub fn subnets_to_csv(subnets: &[Ipv4]) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(
            subnets
                .iter()
                .enumerate()
                .map(|(i, s)| subnet_csv_row(i, s)),
        )
        .join("\n")
}
