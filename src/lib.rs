//! cateda: Catalog Exploratory Data Analysis
//!
//! Loads a media catalog export, cleans missing values with fixed column
//! rules, derives numeric durations, computes descriptive statistics and
//! renders summary charts.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
