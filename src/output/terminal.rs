//! Terminal output utilities.
//!
//! Provides formatting helpers and a table printer for split results.

use colored::Colorize;

use crate::models::Ipv4;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Print subnets as a table with broadcast address and address count.
pub fn print_subnet_table(subnets: &[Ipv4]) {
    log::info!("#Start print_subnet_table() count={}", subnets.len());
    println!(
        "{}",
        format!(
            "{},{},{},{}",
            format_field("cnt", 6),
            format_field("subnet_cidr", 20),
            format_field("broadcast", 18),
            format_field("addresses", 12)
        )
        .bold()
    );
    for (i, subnet) in subnets.iter().enumerate() {
        println!(
            "{},{},{},{}",
            format_field(i + 1, 6),
            format_field(subnet, 20).blue(),
            format_field(subnet.hi(), 18),
            format_field(subnet.num_hosts(), 12)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_exact() {
        assert_eq!(format_field("test", 6), "\"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }
}
