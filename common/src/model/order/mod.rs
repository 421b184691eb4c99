//! Completed order models and related types

use serde::{Deserialize, Serialize};

use crate::decimal::{checked_mul, Amount, Price, Quantity};
use crate::error::{Error, Result};

/// Order side (bid or ask)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buys base currency, spending counter currency
    Bid,
    /// Sells base currency, receiving counter currency
    Ask,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Bid => write!(f, "BID"),
            Side::Ask => write!(f, "ASK"),
        }
    }
}

/// A fully executed trade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedOrder {
    /// Counter currency paid per unit of base currency
    pub price: Price,
    /// Base currency transacted
    pub volume: Quantity,
    /// Fee charged in base currency
    #[serde(default)]
    pub base_fee: Quantity,
    /// Fee charged in counter currency
    #[serde(default)]
    pub counter_fee: Amount,
    /// Order side
    pub side: Side,
}

impl CompletedOrder {
    /// Create a new completed order without fees
    pub fn new(side: Side, price: Price, volume: Quantity) -> Self {
        Self {
            price,
            volume,
            base_fee: Quantity::ZERO,
            counter_fee: Amount::ZERO,
            side,
        }
    }
    
    /// Create a completed bid
    pub fn bid(price: Price, volume: Quantity) -> Self {
        Self::new(Side::Bid, price, volume)
    }
    
    /// Create a completed ask
    pub fn ask(price: Price, volume: Quantity) -> Self {
        Self::new(Side::Ask, price, volume)
    }
    
    /// Set the fee charged in base currency
    pub fn with_base_fee(mut self, fee: Quantity) -> Self {
        self.base_fee = fee;
        self
    }
    
    /// Set the fee charged in counter currency
    pub fn with_counter_fee(mut self, fee: Amount) -> Self {
        self.counter_fee = fee;
        self
    }
    
    /// Counter currency notional of the trade (price * volume)
    pub fn cost(&self) -> Result<Amount> {
        checked_mul(self.price, self.volume)
    }
    
    /// Reject orders carrying a negative price, volume or fee
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("price", self.price),
            ("volume", self.volume),
            ("base fee", self.base_fee),
            ("counter fee", self.counter_fee),
        ];
        
        for (name, value) in fields {
            if value < Quantity::ZERO {
                return Err(Error::InvalidOrder(format!(
                    "{} {} must not be negative, got {}",
                    self.side, name, value
                )));
            }
        }
        
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::dec;

    #[test]
    fn test_cost_is_price_times_volume() {
        let order = CompletedOrder::bid(dec!(250), dec!(7.5));
        assert_eq!(order.cost().unwrap(), dec!(1875));
        assert_eq!(order.base_fee, Quantity::ZERO);
        assert_eq!(order.counter_fee, Amount::ZERO);
    }

    #[test]
    fn test_cost_out_of_range() {
        let order = CompletedOrder::bid(dec!(1000000000000000), dec!(100000000000000));
        assert!(order.validate().is_ok());
        assert!(matches!(order.cost(), Err(Error::DecimalError(_))));
    }

    #[test]
    fn test_validate_accepts_zero_and_positive() {
        let order = CompletedOrder::ask(dec!(0), dec!(0)).with_counter_fee(dec!(0.1));
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_fields() {
        let negative_volume = CompletedOrder::bid(dec!(100), dec!(-1));
        assert!(matches!(negative_volume.validate(), Err(Error::InvalidOrder(_))));
        
        let negative_price = CompletedOrder::ask(dec!(-100), dec!(1));
        assert!(matches!(negative_price.validate(), Err(Error::InvalidOrder(_))));
        
        let negative_fee = CompletedOrder::ask(dec!(100), dec!(1)).with_base_fee(dec!(-0.5));
        let err = negative_fee.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid order: ASK base fee must not be negative, got -0.5");
    }

    #[test]
    fn test_side_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Side::Bid).unwrap(), "\"BID\"");
        assert_eq!(serde_json::from_str::<Side>("\"ASK\"").unwrap(), Side::Ask);
    }

    #[test]
    fn test_fees_default_to_zero_when_absent() {
        let order: CompletedOrder =
            serde_json::from_str(r#"{"price":"100.5","volume":"2","side":"BID"}"#).unwrap();
        assert_eq!(order, CompletedOrder::bid(dec!(100.5), dec!(2)));
    }
}
