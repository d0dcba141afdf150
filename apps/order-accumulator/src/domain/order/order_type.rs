//! Order type (market, limit, stop variants).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order type.
///
/// The inbound decoder maps unrecognized wire codes to `Undefined` rather
/// than failing; the outbound encoder simply omits the field in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order.
    Market,
    /// Limit order.
    Limit,
    /// Stop order.
    Stop,
    /// Stop-limit order.
    StopLimit,
    /// Unrecognized or absent type code.
    #[default]
    Undefined,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "MARKET"),
            Self::Limit => write!(f, "LIMIT"),
            Self::Stop => write!(f, "STOP"),
            Self::StopLimit => write!(f, "STOP_LIMIT"),
            Self::Undefined => write!(f, "UNDEFINED"),
        }
    }
}
