//! HTTP control surface.

pub mod controller;
pub mod response;

pub use controller::{AppState, HealthResponse, create_router};
pub use response::{ApiError, ProblemDetails};
