//! Domain layer - order model and exposure ledger, no transport concerns.

pub mod ledger;
pub mod order;
pub mod shared;
