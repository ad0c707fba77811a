//! Hosted checkout.

use mockall::automock;
use thiserror::Error;

pub mod stripe;

pub use stripe::{CheckoutRedirect, StripeCheckout};

/// Errors raised while handing off to the hosted checkout page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// No publishable key was configured.
    #[error("missing publishable key")]
    MissingPublishableKey,

    /// The configured key is not a publishable key.
    #[error("publishable keys start with `pk_`")]
    InvalidPublishableKey,

    /// The redirect could not be performed.
    #[error("redirect to checkout failed: {0}")]
    Redirect(String),
}

/// Sends the shopper to the hosted checkout page.
#[automock]
pub trait Redirector: Send + Sync {
    /// Navigate to `target`.
    fn redirect(&self, target: CheckoutRedirect) -> Result<(), PaymentError>;
}
