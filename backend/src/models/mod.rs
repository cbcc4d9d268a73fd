pub mod dataset;
pub mod time;
pub mod visit;

pub use dataset::*;
pub use time::*;
pub use visit::*;
