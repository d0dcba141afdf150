//! Infrastructure layer: protocol and HTTP adapters around the domain.

pub mod fix;
pub mod http;
