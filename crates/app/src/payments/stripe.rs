//! Stripe hosted checkout handle.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::{
    backend::SessionId,
    config::PaymentsConfig,
    payments::{PaymentError, Redirector},
};

/// Where the shopper is sent to pay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRedirect {
    /// Payment session created by the backend
    pub session_id: SessionId,

    /// Hosted checkout page for that session
    pub url: String,
}

/// A loaded Stripe client handle, bound to one publishable key.
#[derive(Clone)]
pub struct StripeCheckout {
    publishable_key: String,
    checkout_url: String,
}

impl StripeCheckout {
    /// Load a handle from the configured publishable key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or is not a publishable (`pk_`) key.
    pub fn load(config: &PaymentsConfig) -> Result<Self, PaymentError> {
        let key = config.stripe_public_key.trim();

        if key.is_empty() {
            return Err(PaymentError::MissingPublishableKey);
        }

        if !key.starts_with("pk_") {
            return Err(PaymentError::InvalidPublishableKey);
        }

        Ok(Self {
            publishable_key: key.to_string(),
            checkout_url: config.stripe_checkout_url.trim_end_matches('/').to_string(),
        })
    }

    /// Whether this handle targets Stripe's test mode.
    pub fn is_test_mode(&self) -> bool {
        self.publishable_key.starts_with("pk_test_")
    }

    /// Hosted checkout target for a session.
    pub fn checkout_redirect(&self, session_id: SessionId) -> CheckoutRedirect {
        let url = format!("{}/{session_id}", self.checkout_url);

        CheckoutRedirect { session_id, url }
    }

    /// Send the shopper to the hosted checkout page for `session_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the redirector fails.
    pub fn redirect_to_checkout(
        &self,
        redirector: &dyn Redirector,
        session_id: SessionId,
    ) -> Result<CheckoutRedirect, PaymentError> {
        let target = self.checkout_redirect(session_id);

        redirector.redirect(target.clone())?;

        Ok(target)
    }
}

impl Debug for StripeCheckout {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StripeCheckout")
            .field("test_mode", &self.is_test_mode())
            .field("checkout_url", &self.checkout_url)
            .finish_non_exhaustive()
    }
}
