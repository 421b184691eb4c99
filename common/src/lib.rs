//! Common types and utilities for profit/loss reporting
//!
//! This library contains the shared types used across the workspace: exact
//! decimal aliases, a unified error type, and the domain models for completed
//! orders and cumulative reports.

pub mod error;
pub mod model;
pub mod decimal;

/// Re-export important types
pub use error::{Error, Result, ErrorExt};
pub use decimal::*;
pub use model::order::{CompletedOrder, Side};
pub use model::report::{CalcType, Report};
