//! Shared domain building blocks.

mod errors;
mod symbol;

pub use errors::DomainError;
pub use symbol::Symbol;
