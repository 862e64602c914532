//! Report module - console summaries and charts

pub mod charts;
pub mod overview;
pub mod summary;

pub use charts::*;
pub use overview::*;
pub use summary::*;
