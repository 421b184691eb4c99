//! Folding completed orders into profit/loss reports

use common::decimal::{checked_add, checked_mul, checked_sub, div_or_zero};
use common::error::{ErrorExt, Result};
use common::model::order::{CompletedOrder, Side};
use common::model::report::Report;
use tracing::{debug, trace, warn};

use crate::config::{AccumulatorConfig, OrderValidation};

/// Fold a batch of completed orders into a report
///
/// Orders are applied in sequence; the input report is left untouched and the
/// updated report is returned. Splitting a sequence into several batches yields
/// the same report as applying it in one go.
///
/// Fails with `Error::DecimalError` when a notional, total or the realised gain
/// leaves the `Decimal` range (magnitude above about 7.9e28). Nothing is applied
/// in that case.
pub fn apply(report: &Report, orders: &[CompletedOrder]) -> Result<Report> {
    fold(report, orders, false)
}

fn fold(report: &Report, orders: &[CompletedOrder], trace_orders: bool) -> Result<Report> {
    let mut next = report.clone();
    for (index, order) in orders.iter().enumerate() {
        fold_order(&mut next, order).with_context(|| format!("order {} of batch", index))?;
        if trace_orders {
            trace!(
                side = %order.side,
                price = %order.price,
                volume = %order.volume,
                "Folded order: {}",
                next
            );
        }
    }
    Ok(next)
}

/// Apply a single order to the running report
fn fold_order(report: &mut Report, order: &CompletedOrder) -> Result<()> {
    let order_cost = order.cost()?;
    
    match order.side {
        Side::Bid => {
            report.base_bought = checked_add(report.base_bought, order.volume)?;
            report.counter_sold = checked_add(report.counter_sold, order_cost)?;
            report.average_buy_price = div_or_zero(report.counter_sold, report.base_bought)?;
            
            report.base_balance = checked_add(report.base_balance, order.volume)?;
            report.counter_balance = checked_sub(report.counter_balance, order_cost)?;
        },
        Side::Ask => {
            report.counter_bought = checked_add(report.counter_bought, order_cost)?;
            report.base_sold = checked_add(report.base_sold, order.volume)?;
            report.average_sell_price = div_or_zero(report.counter_bought, report.base_sold)?;
            
            report.base_balance = checked_sub(report.base_balance, order.volume)?;
            report.counter_balance = checked_add(report.counter_balance, order_cost)?;
        }
    }
    
    report.counter_fees = checked_add(report.counter_fees, order.counter_fee)?;
    report.counter_balance = checked_sub(report.counter_balance, order.counter_fee)?;
    
    // Base fees are only tallied, base_balance is not reduced by them
    report.base_fees = checked_add(report.base_fees, order.base_fee)?;
    
    let spread = checked_sub(report.average_sell_price, report.average_buy_price)?;
    report.realised_gain = checked_sub(
        checked_mul(spread, report.matched_volume())?,
        report.counter_fees,
    )?;
    
    report.total_volume = checked_add(report.total_volume, order.volume)?;
    report.order_count += 1;
    Ok(())
}

/// Applies order batches to reports according to an [`AccumulatorConfig`]
///
/// The accumulator holds no report state of its own; callers pass the current
/// report in and keep the one returned.
#[derive(Debug, Clone, Default)]
pub struct ReportAccumulator {
    config: AccumulatorConfig,
}

impl ReportAccumulator {
    /// Create a new accumulator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Create a new accumulator with a specific configuration
    pub fn with_config(config: AccumulatorConfig) -> Self {
        Self { config }
    }
    
    /// Current configuration
    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }
    
    /// Validate and fold a batch of completed orders into a report
    ///
    /// Under [`OrderValidation::Strict`] the whole batch is checked before any
    /// order is applied. A rejected batch, or one that overflows, leaves nothing
    /// half-applied.
    pub fn apply(&self, report: &Report, orders: &[CompletedOrder]) -> Result<Report> {
        if self.config.validation == OrderValidation::Strict {
            for (index, order) in orders.iter().enumerate() {
                if let Err(e) = order.validate().with_context(|| format!("order {} of batch", index)) {
                    warn!("Rejecting batch of {} orders: {}", orders.len(), e);
                    return Err(e);
                }
            }
        }
        
        debug!("Applying {} orders to report with {} orders", orders.len(), report.order_count);
        
        fold(report, orders, self.config.trace_orders).map_err(|e| {
            warn!("Batch of {} orders not applied: {}", orders.len(), e);
            e
        })
    }
}
