//! Report accumulator folding completed orders into profit/loss reports

pub mod accumulator;
pub mod config;

pub use accumulator::{apply, ReportAccumulator};
pub use config::{AccumulatorConfig, OrderValidation};
