//! Order status lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status.
///
/// An order starts `Undefined` (undecided). The ledger's admission outcome
/// moves it to `New` or `Rejected`; the remaining states are reachable only
/// through external execution events and are modeled here so reports about
/// them can be represented, but this service never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Not yet decided. Signals a construction error if observed downstream.
    #[default]
    Undefined,
    /// Admitted into the ledger.
    New,
    /// Partially filled by the market.
    PartiallyFilled,
    /// Fully filled.
    Filled,
    /// Canceled.
    Canceled,
    /// Not admitted; rejection reason populated.
    Rejected,
    /// Expired.
    Expired,
}

impl OrderStatus {
    /// Whether the admission decision has been made.
    #[must_use]
    pub const fn is_decided(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    /// Whether this is a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Filled | Self::Canceled | Self::Rejected | Self::Expired)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "UNDEFINED"),
            Self::New => write!(f, "NEW"),
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
            Self::Canceled => write!(f, "CANCELED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}
