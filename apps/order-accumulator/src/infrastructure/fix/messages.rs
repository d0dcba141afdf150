//! FIX 4.4 order-entry message types.
//!
//! Typed views of the messages exchanged with the external session engine.
//! The engine owns the wire session (logon, heartbeats, sequencing, resend);
//! this service only ever sees already-framed messages and hands back framed
//! replies.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// FIX 4.4 field values used by the codec.
pub mod wire {
    /// Side (54): buy.
    pub const SIDE_BUY: char = '1';
    /// Side (54): sell.
    pub const SIDE_SELL: char = '2';

    /// OrdType (40): market.
    pub const ORD_TYPE_MARKET: char = '1';
    /// OrdType (40): limit.
    pub const ORD_TYPE_LIMIT: char = '2';
    /// OrdType (40): stop.
    pub const ORD_TYPE_STOP: char = '3';
    /// OrdType (40): stop-limit.
    pub const ORD_TYPE_STOP_LIMIT: char = '4';

    /// ExecType (150): new.
    pub const EXEC_TYPE_NEW: char = '0';
    /// ExecType (150): partial fill.
    pub const EXEC_TYPE_PARTIAL_FILL: char = '1';
    /// ExecType (150): fill.
    pub const EXEC_TYPE_FILL: char = '2';
    /// ExecType (150): canceled.
    pub const EXEC_TYPE_CANCELED: char = '4';
    /// ExecType (150): rejected.
    pub const EXEC_TYPE_REJECTED: char = '8';
    /// ExecType (150): expired.
    pub const EXEC_TYPE_EXPIRED: char = 'C';

    /// OrdStatus (39): new.
    pub const ORD_STATUS_NEW: char = '0';
    /// OrdStatus (39): partially filled.
    pub const ORD_STATUS_PARTIALLY_FILLED: char = '1';
    /// OrdStatus (39): filled.
    pub const ORD_STATUS_FILLED: char = '2';
    /// OrdStatus (39): canceled.
    pub const ORD_STATUS_CANCELED: char = '4';
    /// OrdStatus (39): rejected.
    pub const ORD_STATUS_REJECTED: char = '8';
    /// OrdStatus (39): expired.
    pub const ORD_STATUS_EXPIRED: char = 'C';
}

/// Inbound NewOrderSingle (35=D), as decoded by the session engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderSingle {
    /// ClOrdID (11).
    pub cl_ord_id: String,
    /// Symbol (55).
    pub symbol: String,
    /// Side (54) wire code.
    pub side: char,
    /// OrderQty (38).
    pub order_qty: Decimal,
    /// Price (44).
    pub price: Decimal,
    /// OrdType (40) wire code, when set.
    pub ord_type: Option<char>,
    /// Account (1), when set.
    pub account: Option<String>,
    /// TransactTime (60).
    pub transact_time: DateTime<Utc>,
}

/// Outbound ExecutionReport (35=8) reporting the admission outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReport {
    /// OrderID (37). "0" when the order was not admitted.
    pub order_id: String,
    /// ExecID (17). "0" when the order was not admitted.
    pub exec_id: String,
    /// ExecType (150) wire code.
    pub exec_type: char,
    /// OrdStatus (39) wire code.
    pub ord_status: char,
    /// Echoed ClOrdID (11).
    pub cl_ord_id: String,
    /// Symbol (55).
    pub symbol: String,
    /// Side (54) wire code.
    pub side: char,
    /// OrderQty (38).
    pub order_qty: Decimal,
    /// LeavesQty (151).
    pub leaves_qty: Decimal,
    /// CumQty (14).
    pub cum_qty: Decimal,
    /// AvgPx (6).
    pub avg_px: Decimal,
    /// Price (44).
    pub price: Decimal,
    /// OrdType (40), omitted when undefined.
    pub ord_type: Option<char>,
    /// Account (1), when supplied on the way in.
    pub account: Option<String>,
    /// Text (58): rejection reason, only on rejected reports.
    pub text: Option<String>,
    /// TransactTime (60).
    pub transact_time: DateTime<Utc>,
}
