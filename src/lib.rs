//! Running profit/loss reports folded from completed trading orders
//!
//! This package re-exports the workspace crates so callers can depend on a
//! single package.

pub use common::decimal::{self, dec, Amount, Price, Quantity};
pub use common::error::{Error, Result};
pub use common::model::order::{CompletedOrder, Side};
pub use common::model::report::{CalcType, Report};
pub use pnl_engine::{apply, AccumulatorConfig, OrderValidation, ReportAccumulator};
