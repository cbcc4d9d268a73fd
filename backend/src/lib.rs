//! # Clinic Analytics Backend
//!
//! Patient-volume and patient-experience analytics over a static clinical
//! visit dataset.
//!
//! The dataset is read once at startup, normalized into [`models::VisitRecord`]s
//! and kept immutable. Every dashboard interaction filters it by clinic, date
//! range and admit source, then reshapes the subset into a weekday × hour
//! heatmap of patient volume and per-department box-plot series of wait time
//! and care score. The results are served as JSON over HTTP.
//!
//! ## Architecture
//!
//! - [`parsing`]: header-checked CSV rows
//! - [`preprocessing`]: admit-source filling, timestamp parsing, calendar fields
//! - [`io`]: plain/gzip dataset loading
//! - [`models`]: visit records, calendar fields and the dataset container
//! - [`services`]: filter engine, heatmap and box-plot aggregators
//! - [`api`]: result types handed to the presentation layer
//! - [`config`]: `dashboard.toml` and env overrides
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use clinic_analytics::io::load_and_normalize;
//! use clinic_analytics::models::DEFAULT_DEPARTMENTS;
//! use clinic_analytics::services::{compute_dashboard, FilterPredicate};
//!
//! let dataset = load_and_normalize("data/clinical_analytics.csv.gz")?;
//! let predicate = FilterPredicate::new(
//!     "Acme Clinic",
//!     NaiveDate::from_ymd_opt(2014, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2014, 12, 31).unwrap(),
//!     dataset.admit_sources(),
//! );
//! let data = compute_dashboard(&dataset, &predicate, &DEFAULT_DEPARTMENTS);
//! println!("{} check-ins", data.heatmap.total());
//! # Ok::<(), clinic_analytics::error::DatasetError>(())
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod preprocessing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
