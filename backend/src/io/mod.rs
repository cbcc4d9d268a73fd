pub mod loaders;


pub use loaders::{load_and_normalize, SourceEncoding, VisitLoader};
