//! Output formatting for split results.
//!
//! - [`csv`] - CSV line rendering
//! - [`json`] - JSON rendering
//! - [`terminal`] - colored table printing

mod csv;
mod json;
mod terminal;

// Re-export public functions
pub use csv::{subnet_csv_row, subnets_to_csv, CSV_HEADER};
pub use json::subnets_to_json;
pub use terminal::{format_field, print_subnet_table};
