//! Order-entry gateway: the per-message handler driven by the session
//! engine.
//!
//! One inbound NewOrderSingle yields exactly one outbound ExecutionReport:
//! decode, let the ledger decide, encode the outcome and hand it back to the
//! originating session. A delivery failure is logged and not retried; the
//! ledger's state change, if any, already happened and stands.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::mpsc;

use crate::domain::ledger::ExposureLedger;
use crate::infrastructure::fix::codec::{
    FixDecodeError, FixEncodeError, decode_new_order_single, encode_execution_report,
};
use crate::infrastructure::fix::messages::{ExecutionReport, NewOrderSingle};

/// Identifier of a FIX session, as assigned by the session engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The session id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound delivery failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The target session is no longer connected.
    #[error("session not found: {session_id}")]
    NotFound {
        /// The session that went away.
        session_id: String,
    },

    /// The transport refused the message.
    #[error("transport error: {message}")]
    Transport {
        /// What the transport reported.
        message: String,
    },
}

/// Gateway failures surfaced back to the session engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The inbound message failed structural decoding.
    #[error(transparent)]
    Decode(#[from] FixDecodeError),

    /// The outcome could not be represented on the wire.
    #[error(transparent)]
    Encode(#[from] FixEncodeError),
}

/// Outbound port: delivery of execution reports to a session.
///
/// Implemented by whatever transport the embedding engine provides.
#[async_trait]
pub trait FixSender: Send + Sync {
    /// Deliver `report` to the session identified by `session_id`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session is gone or the transport
    /// fails.
    async fn send_to_target(
        &self,
        report: ExecutionReport,
        session_id: &SessionId,
    ) -> Result<(), SessionError>;
}

/// An execution report tagged with its destination session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReport {
    /// Destination session.
    pub session_id: SessionId,
    /// The report to deliver.
    pub report: ExecutionReport,
}

/// [`FixSender`] that queues reports onto an in-process channel.
///
/// The binary drains the receiving end where the engine transport attaches;
/// tests use it to observe outbound traffic.
#[derive(Debug, Clone)]
pub struct ChannelFixSender {
    tx: mpsc::UnboundedSender<OutboundReport>,
}

impl ChannelFixSender {
    /// Create a sender/receiver pair.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundReport>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl FixSender for ChannelFixSender {
    async fn send_to_target(
        &self,
        report: ExecutionReport,
        session_id: &SessionId,
    ) -> Result<(), SessionError> {
        self.tx
            .send(OutboundReport {
                session_id: session_id.clone(),
                report,
            })
            .map_err(|_| SessionError::NotFound {
                session_id: session_id.to_string(),
            })
    }
}

/// Per-message order-entry handler.
pub struct OrderEntryGateway<S: FixSender> {
    ledger: Arc<ExposureLedger>,
    sender: S,
}

impl<S: FixSender> OrderEntryGateway<S> {
    /// Create a gateway over the shared ledger.
    pub const fn new(ledger: Arc<ExposureLedger>, sender: S) -> Self {
        Self { ledger, sender }
    }

    /// Handle one inbound NewOrderSingle from `session_id`.
    ///
    /// Ledger validation failures are recovered here into Rejected outcomes;
    /// decode and encode failures bubble to the engine, which owns
    /// session-level rejects.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the message fails structural decoding
    /// or its outcome cannot be encoded.
    pub async fn on_new_order_single(
        &self,
        msg: &NewOrderSingle,
        session_id: &SessionId,
    ) -> Result<(), GatewayError> {
        let mut order = decode_new_order_single(msg, session_id.as_str())?;

        match self.ledger.admit_within_limit(&mut order) {
            Ok(admitted) => {
                tracing::info!(
                    cl_ord_id = order.cl_ord_id(),
                    symbol = %order.symbol(),
                    admitted,
                    "Order decided"
                );
            }
            Err(e) => {
                tracing::warn!(
                    cl_ord_id = order.cl_ord_id(),
                    error = %e,
                    "Order failed business validation"
                );
                order.reject(e.to_string());
            }
        }

        let report = encode_execution_report(&order)?;

        if let Err(e) = self.sender.send_to_target(report, session_id).await {
            tracing::error!(
                session_id = %session_id,
                cl_ord_id = order.cl_ord_id(),
                error = %e,
                "Failed to deliver execution report"
            );
        }

        Ok(())
    }
}
