//! Service layer for filtering and aggregation.
//!
//! Every service is a pure function over the immutable dataset; the HTTP layer
//! calls them once per request.

pub mod boxplot;

pub mod dashboard;

pub mod filtering;

pub mod heatmap;

pub use boxplot::{aggregate_boxplot, compute_stats};
pub use dashboard::{compute_dashboard, dashboard_options, default_predicate};
pub use filtering::{filter_visits, FilterPredicate};
pub use heatmap::aggregate_heatmap;
