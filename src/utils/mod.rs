//! Formatting and JSON helpers

pub mod helper;

pub use helper::{escape_html, format_address, format_usd, raw_to_quantity, truthy_text};
