//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use crate::{
    backend::{BackendError, CartBackend, StorefrontClient},
    cart::{CartController, CartEvent},
    catalog::CatalogService,
    config::{PaymentsConfig, StorefrontConfig},
    payments::Redirector,
    uploads::ImageUploader,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to build backend client")]
    Backend(#[source] BackendError),
}

#[derive(Clone)]
pub struct AppContext {
    pub cart: Arc<dyn CartBackend>,
    pub catalog: CatalogService,
    pub uploads: ImageUploader,
    pub payments: PaymentsConfig,
}

impl AppContext {
    /// Build application context from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend HTTP client cannot be built.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, AppInitError> {
        let client =
            Arc::new(StorefrontClient::new(&config.backend).map_err(AppInitError::Backend)?);

        Ok(Self {
            cart: client.clone(),
            catalog: CatalogService::new(client),
            uploads: ImageUploader::new(&config.uploads),
            payments: config.payments.clone(),
        })
    }

    /// A fresh cart controller plus the receiving end of its event channel.
    pub fn cart_controller(
        &self,
        redirector: Arc<dyn Redirector>,
    ) -> (CartController, UnboundedReceiver<CartEvent>) {
        let (events, receiver) = unbounded_channel();

        let controller = CartController::new(
            self.cart.clone(),
            self.payments.clone(),
            redirector,
            events,
        );

        (controller, receiver)
    }
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext")
            .field("catalog", &self.catalog)
            .field("uploads", &self.uploads)
            .finish_non_exhaustive()
    }
}
