//! Shared helpers for digit-only identifiers

mod digits;

pub use digits::{all_equal, digits_to_string, normalize, parse_digits, strip_separators};
