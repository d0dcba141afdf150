// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Order Accumulator - Core Library
//!
//! Exposure-limited order admission for a FIX order-entry gateway.
//!
//! Every inbound NewOrderSingle is decided against a per-instrument net
//! exposure limit: within the limit the order is accepted, recorded, and
//! acknowledged with a NEW execution report; over the limit it is turned
//! away with a REJECTED report and leaves no trace in the book.
//!
//! # Architecture
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic with no adapter dependencies
//!   - `order`: the order model, sides, types, status lifecycle
//!   - `ledger`: the exposure ledger and its admission rule
//!   - `shared`: symbols and the domain error taxonomy
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `fix`: message types, codec, and the order-entry gateway
//!   - `http`: the operator control surface

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// Domain re-exports
pub use domain::ledger::{EXPOSURE_LIMIT_REJECTION, ExposureLedger};
pub use domain::order::{Order, OrderSide, OrderStatus, OrderType};
pub use domain::shared::{DomainError, Symbol};

// Infrastructure re-exports
pub use infrastructure::fix::{
    ChannelFixSender, ExecutionReport, FixSender, GatewayError, NewOrderSingle, OrderEntryGateway,
    OutboundReport, SessionError, SessionId,
};
pub use infrastructure::http::{AppState, create_router};
