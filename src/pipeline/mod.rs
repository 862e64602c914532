//! Pipeline module - the load, clean, transform and aggregate stages

pub mod aggregate;
pub mod cleaner;
pub mod columns;
pub mod error;
pub mod loader;
pub mod missing;
pub mod stats;
pub mod transform;

pub use aggregate::*;
pub use cleaner::*;
pub use error::PipelineError;
pub use loader::*;
pub use missing::*;
pub use stats::*;
pub use transform::*;
