//! Parsers for the clinical visit dataset.
//!
//! - [`csv_parser`]: read header-checked CSV rows into [`RawVisitRow`]s
//!
//! # Example
//!
//! ```no_run
//! use clinic_analytics::parsing::csv_parser::parse_visit_csv_str;
//!
//! let rows = parse_visit_csv_str("Clinic Name,Admit Source,...")
//!     .expect("Failed to parse dataset");
//! ```

pub mod csv_parser;


pub use csv_parser::RawVisitRow;
