//! Order side (buy or sell).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side.
///
/// `Undefined` is the permissive-decode placeholder for unrecognized wire
/// codes; it contributes zero to exposure and cannot be encoded back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    /// Buy order.
    Buy,
    /// Sell order.
    Sell,
    /// Unrecognized side code.
    #[default]
    Undefined,
}

impl OrderSide {
    /// Returns the sign for exposure calculations.
    ///
    /// Buy = +1, Sell = -1, Undefined = 0.
    #[must_use]
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
            Self::Undefined => 0,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
            Self::Undefined => write!(f, "UNDEFINED"),
        }
    }
}
