//! Translation between FIX messages and the domain order model.
//!
//! This is the only place wire-format codes map to and from the domain
//! enumerations. Inbound enum decoding is permissive (unrecognized codes
//! become `Undefined` and are left to domain validation); structural
//! requirements (client order id, symbol, positive quantity and price)
//! fail decode outright, independent of any ledger decision.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::order::{Order, OrderSide, OrderStatus, OrderType};
use crate::domain::shared::Symbol;
use crate::infrastructure::fix::messages::{ExecutionReport, NewOrderSingle, wire};

/// Placeholder identifier for reports about orders that were never admitted.
const UNASSIGNED_ID: &str = "0";

/// Decode-level failures for inbound order-entry messages.
///
/// Distinct from a ledger rejection: a message failing decode never reaches
/// the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixDecodeError {
    /// A structurally required field is missing or blank.
    #[error("missing required field '{field}'")]
    MissingField {
        /// FIX field name.
        field: &'static str,
    },

    /// A field value fails structural validation.
    #[error("invalid value for field '{field}': {message}")]
    InvalidField {
        /// FIX field name.
        field: &'static str,
        /// What was wrong.
        message: String,
    },
}

/// Encode-level failures for outbound execution reports.
///
/// These are caller programming errors, not business rejections: an order
/// must be decided, and its side representable, before a report about it can
/// exist on the wire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixEncodeError {
    /// The order's admission decision has not been made.
    #[error("cannot encode an execution report for an undecided order")]
    UndecidedStatus,

    /// The order's side has no wire representation.
    #[error("cannot encode order side '{side}' on the wire")]
    UndefinedSide {
        /// The offending side.
        side: String,
    },
}

/// Decode an inbound NewOrderSingle into an undecided [`Order`].
///
/// `source` tags the originating counterparty (the session the message
/// arrived on).
///
/// # Errors
///
/// Returns [`FixDecodeError`] when the client order id or symbol is blank,
/// or when quantity or price is not strictly positive.
pub fn decode_new_order_single(
    msg: &NewOrderSingle,
    source: &str,
) -> Result<Order, FixDecodeError> {
    if msg.cl_ord_id.trim().is_empty() {
        return Err(FixDecodeError::MissingField { field: "ClOrdID" });
    }

    let symbol = Symbol::new(msg.symbol.as_str());
    if symbol.is_blank() {
        return Err(FixDecodeError::MissingField { field: "Symbol" });
    }

    if msg.order_qty <= Decimal::ZERO {
        return Err(FixDecodeError::InvalidField {
            field: "OrderQty",
            message: "must be greater than zero".to_string(),
        });
    }

    if msg.price <= Decimal::ZERO {
        return Err(FixDecodeError::InvalidField {
            field: "Price",
            message: "must be greater than zero".to_string(),
        });
    }

    let mut order = Order::new(
        msg.cl_ord_id.clone(),
        symbol,
        side_from_wire(msg.side),
        msg.order_qty,
        msg.price,
    )
    .with_order_type(msg.ord_type.map_or(OrderType::Undefined, order_type_from_wire))
    .with_source(source)
    .with_transact_time(msg.transact_time);

    if let Some(account) = &msg.account {
        order = order.with_account(account.clone());
    }

    Ok(order)
}

/// Encode a decided [`Order`] as an ExecutionReport.
///
/// Identifiers absent because the order was not admitted encode as `"0"`;
/// an undefined order type is omitted; the rejection reason rides in Text
/// only on rejected reports.
///
/// # Errors
///
/// Returns [`FixEncodeError`] if the order is still undecided or its side
/// has no wire representation.
pub fn encode_execution_report(order: &Order) -> Result<ExecutionReport, FixEncodeError> {
    Ok(ExecutionReport {
        order_id: order.order_id().unwrap_or(UNASSIGNED_ID).to_string(),
        exec_id: order.exec_id().unwrap_or(UNASSIGNED_ID).to_string(),
        exec_type: exec_type_to_wire(order.status())?,
        ord_status: ord_status_to_wire(order.status())?,
        cl_ord_id: order.cl_ord_id().to_string(),
        symbol: order.symbol().to_string(),
        side: side_to_wire(order.side())?,
        order_qty: order.quantity(),
        leaves_qty: order.quantity(),
        cum_qty: Decimal::ZERO,
        avg_px: order.price(),
        price: order.price(),
        ord_type: order_type_to_wire(order.order_type()),
        account: order.account().map(ToString::to_string),
        text: match order.status() {
            OrderStatus::Rejected => order.rejection_reason().map(ToString::to_string),
            _ => None,
        },
        transact_time: order.transact_time(),
    })
}

/// Map a Side (54) code to the domain side. Unknown codes become
/// `Undefined`.
#[must_use]
pub const fn side_from_wire(code: char) -> OrderSide {
    match code {
        wire::SIDE_BUY => OrderSide::Buy,
        wire::SIDE_SELL => OrderSide::Sell,
        _ => OrderSide::Undefined,
    }
}

/// Map an OrdType (40) code to the domain type. Unknown codes become
/// `Undefined`.
#[must_use]
pub const fn order_type_from_wire(code: char) -> OrderType {
    match code {
        wire::ORD_TYPE_MARKET => OrderType::Market,
        wire::ORD_TYPE_LIMIT => OrderType::Limit,
        wire::ORD_TYPE_STOP => OrderType::Stop,
        wire::ORD_TYPE_STOP_LIMIT => OrderType::StopLimit,
        _ => OrderType::Undefined,
    }
}

fn side_to_wire(side: OrderSide) -> Result<char, FixEncodeError> {
    match side {
        OrderSide::Buy => Ok(wire::SIDE_BUY),
        OrderSide::Sell => Ok(wire::SIDE_SELL),
        OrderSide::Undefined => Err(FixEncodeError::UndefinedSide {
            side: side.to_string(),
        }),
    }
}

const fn order_type_to_wire(order_type: OrderType) -> Option<char> {
    match order_type {
        OrderType::Market => Some(wire::ORD_TYPE_MARKET),
        OrderType::Limit => Some(wire::ORD_TYPE_LIMIT),
        OrderType::Stop => Some(wire::ORD_TYPE_STOP),
        OrderType::StopLimit => Some(wire::ORD_TYPE_STOP_LIMIT),
        OrderType::Undefined => None,
    }
}

fn exec_type_to_wire(status: OrderStatus) -> Result<char, FixEncodeError> {
    match status {
        OrderStatus::New => Ok(wire::EXEC_TYPE_NEW),
        OrderStatus::PartiallyFilled => Ok(wire::EXEC_TYPE_PARTIAL_FILL),
        OrderStatus::Filled => Ok(wire::EXEC_TYPE_FILL),
        OrderStatus::Canceled => Ok(wire::EXEC_TYPE_CANCELED),
        OrderStatus::Rejected => Ok(wire::EXEC_TYPE_REJECTED),
        OrderStatus::Expired => Ok(wire::EXEC_TYPE_EXPIRED),
        OrderStatus::Undefined => Err(FixEncodeError::UndecidedStatus),
    }
}

fn ord_status_to_wire(status: OrderStatus) -> Result<char, FixEncodeError> {
    match status {
        OrderStatus::New => Ok(wire::ORD_STATUS_NEW),
        OrderStatus::PartiallyFilled => Ok(wire::ORD_STATUS_PARTIALLY_FILLED),
        OrderStatus::Filled => Ok(wire::ORD_STATUS_FILLED),
        OrderStatus::Canceled => Ok(wire::ORD_STATUS_CANCELED),
        OrderStatus::Rejected => Ok(wire::ORD_STATUS_REJECTED),
        OrderStatus::Expired => Ok(wire::ORD_STATUS_EXPIRED),
        OrderStatus::Undefined => Err(FixEncodeError::UndecidedStatus),
    }
}
