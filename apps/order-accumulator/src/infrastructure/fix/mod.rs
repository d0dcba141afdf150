//! FIX order-entry protocol adapter.
//!
//! The wire session itself (logon, heartbeats, sequence numbers, resend) is
//! owned by the external session engine; this module translates between the
//! engine's decoded messages and the domain, and routes outcomes back
//! through the [`FixSender`] port.

pub mod codec;
pub mod gateway;
pub mod messages;

pub use codec::{FixDecodeError, FixEncodeError, decode_new_order_single, encode_execution_report};
pub use gateway::{
    ChannelFixSender, FixSender, GatewayError, OrderEntryGateway, OutboundReport, SessionError,
    SessionId,
};
pub use messages::{ExecutionReport, NewOrderSingle};
