//! Melon orders for domestic, international and government customers.

pub mod models;
pub mod requests;

pub use models::{CategoryKind, MelonOrder, OrderCategory, MAX_MELONS};
pub use requests::NewOrderRequest;
