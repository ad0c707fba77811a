//! Payments Config

use clap::Args;

/// Hosted checkout settings.
#[derive(Debug, Clone, Args)]
pub struct PaymentsConfig {
    /// Stripe publishable key (`pk_...`)
    #[arg(long, env = "STRIPE_PUBLIC_KEY", default_value = "")]
    pub stripe_public_key: String,

    /// Base URL of the hosted checkout page
    #[arg(
        long,
        env = "STRIPE_CHECKOUT_URL",
        default_value = "https://checkout.stripe.com/pay"
    )]
    pub stripe_checkout_url: String,
}
