//! The order model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::order::{OrderSide, OrderStatus, OrderType};
use crate::domain::shared::Symbol;

/// One inbound order plus its lifecycle fields.
///
/// The identifying fields (client order id, symbol, side, quantity, price)
/// are immutable after construction; the symbol is case-normalized by the
/// [`Symbol`] constructor. Status, the exchange-assigned identifiers and the
/// rejection reason are decided exactly once by the ledger's admission
/// outcome.
///
/// Notional is always derived as quantity × price, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    cl_ord_id: String,
    symbol: Symbol,
    side: OrderSide,
    quantity: Decimal,
    price: Decimal,
    order_type: OrderType,
    status: OrderStatus,
    account: Option<String>,
    source: Option<String>,
    transact_time: DateTime<Utc>,
    order_id: Option<String>,
    exec_id: Option<String>,
    rejection_reason: Option<String>,
}

impl Order {
    /// Create a new, undecided order.
    #[must_use]
    pub fn new(
        cl_ord_id: impl Into<String>,
        symbol: Symbol,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
    ) -> Self {
        Self {
            cl_ord_id: cl_ord_id.into(),
            symbol,
            side,
            quantity,
            price,
            order_type: OrderType::Undefined,
            status: OrderStatus::Undefined,
            account: None,
            source: None,
            transact_time: Utc::now(),
            order_id: None,
            exec_id: None,
            rejection_reason: None,
        }
    }

    /// Set the order type.
    #[must_use]
    pub const fn with_order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    /// Set the account.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set the originating source tag.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Set the transaction timestamp.
    #[must_use]
    pub const fn with_transact_time(mut self, transact_time: DateTime<Utc>) -> Self {
        self.transact_time = transact_time;
        self
    }

    /// Client order id.
    #[must_use]
    pub fn cl_ord_id(&self) -> &str {
        &self.cl_ord_id
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Quantity.
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Account, if supplied.
    #[must_use]
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// Originating source tag, if stamped.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Transaction timestamp.
    #[must_use]
    pub const fn transact_time(&self) -> DateTime<Utc> {
        self.transact_time
    }

    /// Exchange order id, assigned on admission.
    #[must_use]
    pub fn order_id(&self) -> Option<&str> {
        self.order_id.as_deref()
    }

    /// Execution id, assigned on admission.
    #[must_use]
    pub fn exec_id(&self) -> Option<&str> {
        self.exec_id.as_deref()
    }

    /// Rejection reason, set only when rejected.
    #[must_use]
    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection_reason.as_deref()
    }

    /// Notional value: quantity × price.
    #[must_use]
    pub fn notional(&self) -> Decimal {
        self.quantity * self.price
    }

    /// Notional signed by side: +notional Buy, -notional Sell, 0 otherwise.
    #[must_use]
    pub fn signed_notional(&self) -> Decimal {
        self.notional() * Decimal::from(self.side.sign())
    }

    /// Mark the order admitted, assigning its exchange identifiers.
    pub fn admit(&mut self, order_id: impl Into<String>, exec_id: impl Into<String>) {
        self.status = OrderStatus::New;
        self.order_id = Some(order_id.into());
        self.exec_id = Some(exec_id.into());
        self.rejection_reason = None;
    }

    /// Mark the order rejected with the given reason.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.status = OrderStatus::Rejected;
        self.rejection_reason = Some(reason.into());
    }
}
