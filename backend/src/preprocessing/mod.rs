//! Preprocessing of raw dataset rows.
//!
//! - [`normalizer`]: fill blank admit sources, parse timestamps and derive
//!   calendar fields

pub mod normalizer;

pub use normalizer::{normalize_row, normalize_rows};
