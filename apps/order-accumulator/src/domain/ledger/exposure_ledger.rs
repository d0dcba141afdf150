//! The exposure-limited order ledger.
//!
//! Maintains a running net exposure per instrument and atomically
//! test-and-admits new orders against a single process-wide limit. The whole
//! ledger state (symbol map plus limit) sits behind one `RwLock` so the
//! read-exposure / read-limit / decide / append sequence inside
//! [`ExposureLedger::admit_within_limit`] is never interleaved with another
//! admission or a concurrent limit change.

use std::collections::HashMap;

use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::order::Order;
use crate::domain::shared::{DomainError, Symbol};

/// Reason attached to orders rejected by the exposure check.
pub const EXPOSURE_LIMIT_REJECTION: &str = "Order exceeded the financial exposure limit";

/// Ledger state guarded as one unit.
#[derive(Debug)]
struct LedgerState {
    /// Admitted orders per symbol, in admission order.
    orders_by_symbol: HashMap<Symbol, Vec<Order>>,
    /// Process-wide exposure limit, shared by all symbols.
    max_exposure: Decimal,
}

/// Exposure-limited order ledger.
///
/// Owns the symbol→orders map and the limit; callers only ever receive
/// independent copies of ledger contents. Net exposure for a symbol is the
/// signed sum of its admitted orders' notionals (Buy positive, Sell
/// negative).
#[derive(Debug)]
pub struct ExposureLedger {
    state: RwLock<LedgerState>,
}

impl ExposureLedger {
    /// Create a ledger with the given initial exposure limit.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the limit is not strictly
    /// positive.
    pub fn new(default_max_exposure: Decimal) -> Result<Self, DomainError> {
        Self::validate_limit(default_max_exposure)?;
        Ok(Self {
            state: RwLock::new(LedgerState {
                orders_by_symbol: HashMap::new(),
                max_exposure: default_max_exposure,
            }),
        })
    }

    /// Decide admission for `order` and record it if within the limit.
    ///
    /// Validates the order, then under one write lock reads the current
    /// exposure and the limit, and admits iff the candidate exposure stays at
    /// or below the limit (the boundary is inclusive). On admission the order
    /// is assigned fresh exchange/execution ids, marked `New` and appended to
    /// its symbol's sequence; on rejection it is marked `Rejected` with a
    /// reason and the ledger is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for a blank symbol or a
    /// non-positive quantity; the ledger is unchanged and the order stays
    /// undecided.
    pub fn admit_within_limit(&self, order: &mut Order) -> Result<bool, DomainError> {
        order.symbol().validate()?;

        if order.quantity() <= Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "quantity",
                "Quantity must be greater than zero",
            ));
        }

        let mut state = self.state.write();

        let current = Self::exposure_of(&state.orders_by_symbol, order.symbol());
        let signed = order.signed_notional();
        let candidate = current + signed;
        let limit = state.max_exposure;

        tracing::debug!(
            symbol = %order.symbol(),
            side = %order.side(),
            amount = %signed,
            current_exposure = %current,
            candidate_exposure = %candidate,
            max_exposure = %limit,
            "Admission decision"
        );

        if candidate.abs() > limit {
            drop(state);
            order.reject(EXPOSURE_LIMIT_REJECTION);
            tracing::debug!(cl_ord_id = order.cl_ord_id(), "Order exceeds the exposure limit");
            return Ok(false);
        }

        order.admit(Uuid::new_v4().to_string(), Uuid::new_v4().to_string());
        state
            .orders_by_symbol
            .entry(order.symbol().clone())
            .or_default()
            .push(order.clone());

        tracing::debug!(cl_ord_id = order.cl_ord_id(), "Order admitted");
        Ok(true)
    }

    /// Net exposure for a symbol. Unknown symbols report zero and no entry
    /// is created.
    #[must_use]
    pub fn exposure(&self, symbol: &Symbol) -> Decimal {
        let state = self.state.read();
        Self::exposure_of(&state.orders_by_symbol, symbol)
    }

    /// Current exposure limit.
    #[must_use]
    pub fn max_exposure(&self) -> Decimal {
        self.state.read().max_exposure
    }

    /// Replace the exposure limit.
    ///
    /// The swap happens under the same lock as admissions, so every
    /// admission sees a single consistent limit for its entire decision.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the value is not strictly
    /// positive; the current limit is unchanged.
    pub fn set_max_exposure(&self, value: Decimal) -> Result<(), DomainError> {
        Self::validate_limit(value)?;
        self.state.write().max_exposure = value;
        Ok(())
    }

    /// Snapshot of every known symbol's exposure, computed under one lock.
    #[must_use]
    pub fn all_exposures(&self) -> HashMap<Symbol, Decimal> {
        let state = self.state.read();
        state
            .orders_by_symbol
            .keys()
            .map(|symbol| {
                (
                    symbol.clone(),
                    Self::exposure_of(&state.orders_by_symbol, symbol),
                )
            })
            .collect()
    }

    /// Admitted orders for a symbol, in admission order.
    ///
    /// Returns an independent copy; unknown symbols yield an empty vec.
    #[must_use]
    pub fn orders(&self, symbol: &Symbol) -> Vec<Order> {
        let state = self.state.read();
        state
            .orders_by_symbol
            .get(symbol)
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of all admitted orders, keyed by symbol.
    #[must_use]
    pub fn all_orders(&self) -> HashMap<Symbol, Vec<Order>> {
        self.state.read().orders_by_symbol.clone()
    }

    /// Remove a symbol's entry entirely. Deleting an unknown symbol is a
    /// no-op.
    pub fn delete_orders(&self, symbol: &Symbol) {
        self.state.write().orders_by_symbol.remove(symbol);
    }

    /// Clear every symbol's entry. The limit is unaffected.
    pub fn delete_all_orders(&self) {
        self.state.write().orders_by_symbol.clear();
    }

    fn exposure_of(orders_by_symbol: &HashMap<Symbol, Vec<Order>>, symbol: &Symbol) -> Decimal {
        orders_by_symbol
            .get(symbol)
            .map_or(Decimal::ZERO, |orders| {
                orders.iter().map(Order::signed_notional).sum()
            })
    }

    fn validate_limit(value: Decimal) -> Result<(), DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::invalid_value(
                "default_max_exposure",
                "Default max exposure must be greater than zero",
            ));
        }
        Ok(())
    }
}
