use clap::{Parser, Subcommand};
use techmart_app::{
    config::{LoggingConfig, StorefrontConfig},
    context::AppContext,
};

mod cart;
mod catalog;
mod upload;

#[derive(Debug, Parser)]
#[command(name = "techmart", about = "TechMart storefront client", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    config: StorefrontConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Inspect and edit the cart
    Cart(cart::CartCommand),

    /// Browse products
    Catalog(catalog::CatalogCommand),

    /// Upload an image to the media service
    Upload(upload::UploadArgs),
}

impl Cli {
    /// Parse arguments after loading `.env` (ignored if missing).
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }

    pub(crate) async fn run(self) -> Result<(), String> {
        let context = AppContext::from_config(&self.config)
            .map_err(|error| format!("failed to initialise storefront client: {error}"))?;

        match self.command {
            Commands::Cart(command) => cart::run(command, &context).await,
            Commands::Catalog(command) => catalog::run(command, &context).await,
            Commands::Upload(args) => upload::run(args, &context).await,
        }
    }
}
