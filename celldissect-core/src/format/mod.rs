//! Formatting helpers for decoded values.

mod digits;

pub use digits::{format_plmn, tbcd_digits};
