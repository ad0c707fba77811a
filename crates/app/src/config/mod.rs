//! Storefront client configuration

use clap::Args;

pub mod backend;
pub mod observability;
pub mod payments;
pub mod uploads;

pub use backend::BackendConfig;
pub use observability::{LogFormat, LoggingConfig};
pub use payments::PaymentsConfig;
pub use uploads::UploadsConfig;

/// TechMart storefront client configuration
#[derive(Debug, Clone, Args)]
pub struct StorefrontConfig {
    /// Storefront backend settings.
    #[command(flatten)]
    pub backend: BackendConfig,

    /// Hosted checkout settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,

    /// Image upload settings.
    #[command(flatten)]
    pub uploads: UploadsConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
