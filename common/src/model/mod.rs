//! Domain models for profit/loss reporting

pub mod order;
pub mod report;
