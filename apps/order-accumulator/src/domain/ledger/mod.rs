//! Exposure ledger: the single source of truth for admitted orders.

mod exposure_ledger;

pub use exposure_ledger::{ExposureLedger, EXPOSURE_LIMIT_REJECTION};
