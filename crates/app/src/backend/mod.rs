//! Storefront backend
//!
//! The REST backend owns carts and products. [`CartBackend`] and [`CatalogBackend`] are the
//! seams the rest of the client talks through; [`StorefrontClient`] implements both over HTTP.

use async_trait::async_trait;
use mockall::automock;
use techmart::{CartLineId, CartSnapshot, Product, Quantity};

pub mod client;
pub mod endpoints;
pub mod errors;
pub(crate) mod wire;

pub use client::StorefrontClient;
pub use endpoints::{Endpoint, Endpoints};
pub use errors::BackendError;

/// Payment session identifier returned by the backend.
pub type SessionId = String;

/// Cart operations of the storefront backend, scoped to the signed-in user.
#[automock]
#[async_trait]
pub trait CartBackend: Send + Sync {
    /// Read the signed-in user's cart.
    async fn fetch_cart(&self) -> Result<CartSnapshot, BackendError>;

    /// Set the quantity of a single line.
    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: Quantity,
    ) -> Result<(), BackendError>;

    /// Delete a line, returning the backend's confirmation message.
    async fn delete_line(&self, line: CartLineId) -> Result<String, BackendError>;

    /// Create a hosted payment session for the given cart. `None` when the backend
    /// responded without a session id.
    async fn create_checkout_session(
        &self,
        cart: CartSnapshot,
    ) -> Result<Option<SessionId>, BackendError>;
}

/// Product listings of the storefront backend.
#[automock]
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Products listed under a category.
    async fn category_products(&self, category: String) -> Result<Vec<Product>, BackendError>;
}
