//! Cumulative profit/loss report models

use serde::{Deserialize, Serialize};

use crate::decimal::{checked_sub, precision, Amount, Price, Quantity};
use crate::error::{Error, Result};

/// Method used to compute the realised gain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcType {
    /// Spread between volume-weighted average sell and buy prices
    #[default]
    Average,
    /// Unrecognised method read back from transport
    #[serde(other)]
    Unknown,
}

/// Running profit/loss report for a single currency pair
///
/// `counter_sold` is the counter currency given up on bids and `counter_bought`
/// the counter currency received on asks. Counter fees reduce both
/// `counter_balance` and `realised_gain`; base fees are tracked in `base_fees`
/// only and leave `base_balance` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Calculation method
    #[serde(rename = "type", default)]
    pub calc_type: CalcType,
    
    /// Gain realised on the matched volume, net of counter fees
    pub realised_gain: Amount,
    
    /// Volume-weighted average bid price
    pub average_buy_price: Price,
    /// Volume-weighted average ask price
    pub average_sell_price: Price,
    
    /// Base currency acquired by bids
    pub base_bought: Quantity,
    /// Base currency disposed of by asks
    pub base_sold: Quantity,
    /// Fees charged in base currency
    pub base_fees: Quantity,
    /// Counter currency received by asks
    pub counter_bought: Amount,
    /// Counter currency spent by bids
    pub counter_sold: Amount,
    /// Fees charged in counter currency
    pub counter_fees: Amount,
    
    /// Net base currency position
    pub base_balance: Quantity,
    /// Net counter currency position
    pub counter_balance: Amount,
    
    /// Base currency traded on both sides
    pub total_volume: Quantity,
    /// Number of orders folded into the report
    pub order_count: u64,
}

impl Report {
    /// Create a new report with zero values
    pub fn new() -> Self {
        Self::default()
    }
    
    /// Base currency volume both bought and sold
    pub fn matched_volume(&self) -> Quantity {
        self.base_bought.min(self.base_sold)
    }
    
    /// Check that the balances agree with the bought, sold and fee totals
    pub fn reconcile(&self) -> Result<()> {
        let expected_base = checked_sub(self.base_bought, self.base_sold)?;
        if self.base_balance != expected_base {
            return Err(Error::ValidationError(format!(
                "base balance {} does not match bought - sold = {}",
                self.base_balance, expected_base
            )));
        }
        
        let expected_counter = checked_sub(
            checked_sub(self.counter_bought, self.counter_sold)?,
            self.counter_fees,
        )?;
        if self.counter_balance != expected_counter {
            return Err(Error::ValidationError(format!(
                "counter balance {} does not match bought - sold - fees = {}",
                self.counter_balance, expected_counter
            )));
        }
        
        Ok(())
    }
    
    /// Serialize the report to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
    
    /// Deserialize a report from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "orders={} realised={} avg_buy={} avg_sell={} base_balance={} counter_balance={}",
            self.order_count,
            precision::round_price(self.realised_gain),
            precision::round_price(self.average_buy_price),
            precision::round_price(self.average_sell_price),
            precision::round_quantity(self.base_balance),
            precision::round_price(self.counter_balance),
        )
    }
}
