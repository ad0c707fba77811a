//! TechMart
//!
//! Storefront domain model: products, bounded cart quantities, cart snapshots and their
//! derived totals in Indian rupees.

pub mod cart;
pub mod ids;
pub mod pricing;
pub mod products;
pub mod quantity;

pub use cart::{CartLine, CartLineId, CartSnapshot, UnreadableLine};
pub use products::{Product, ProductId};
pub use quantity::{Quantity, QuantityError};
