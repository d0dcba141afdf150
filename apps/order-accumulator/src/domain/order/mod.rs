//! Order model: the order aggregate and its closed enumerations.

mod order;
mod order_type;
mod side;
mod status;

pub use order::Order;
pub use order_type::OrderType;
pub use side::OrderSide;
pub use status::OrderStatus;
