//! HTTP client for the storefront backend.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url, cookie::Jar, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use techmart::{CartLineId, CartSnapshot, Product, Quantity};
use tracing::debug;

use crate::{
    backend::{
        CartBackend, CatalogBackend, SessionId,
        endpoints::{Endpoint, Endpoints},
        errors::BackendError,
        wire::{
            CategoryRequest, CheckoutRequest, CheckoutSession, DeleteLineRequest, Envelope,
            UpdateQuantityRequest,
        },
    },
    config::BackendConfig,
};

/// Cookie-authenticated JSON client for the storefront backend.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    base_url: String,
    endpoints: Endpoints,
    http: Client,
}

impl StorefrontClient {
    /// Create a client using the default endpoint table.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cookie cannot be scoped to the base URL or the HTTP
    /// client cannot be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        Self::with_endpoints(config, Endpoints::default())
    }

    /// Create a client with a custom endpoint table.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cookie cannot be scoped to the base URL or the HTTP
    /// client cannot be built.
    pub fn with_endpoints(
        config: &BackendConfig,
        endpoints: Endpoints,
    ) -> Result<Self, BackendError> {
        let jar = Arc::new(Jar::default());

        if let Some(cookie) = config.session_cookie.as_deref() {
            let url = config
                .api_url
                .parse::<Url>()
                .map_err(|error| BackendError::InvalidUrl {
                    url: config.api_url.clone(),
                    reason: error.to_string(),
                })?;

            jar.add_cookie_str(cookie, &url);
        }

        let http = Client::builder()
            .cookie_provider(jar)
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            base_url: config.api_url.clone(),
            endpoints,
            http,
        })
    }

    fn request(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = endpoint.url(&self.base_url);

        debug!(method = %endpoint.method, %url, "backend request");

        self.http
            .request(endpoint.method.clone(), url)
            .header(CONTENT_TYPE, "application/json")
    }

    async fn execute<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, BackendError> {
        let response = request.send().await?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CartBackend for StorefrontClient {
    async fn fetch_cart(&self) -> Result<CartSnapshot, BackendError> {
        let envelope: Envelope<CartSnapshot> =
            Self::execute(self.request(&self.endpoints.view_cart)).await?;

        envelope.into_data().map_err(BackendError::rejected)
    }

    async fn update_quantity(
        &self,
        line: CartLineId,
        quantity: Quantity,
    ) -> Result<(), BackendError> {
        let body = UpdateQuantityRequest { id: &line, quantity };

        let envelope: Envelope<serde_json::Value> =
            Self::execute(self.request(&self.endpoints.update_cart_line).json(&body)).await?;

        if envelope.success {
            Ok(())
        } else {
            Err(BackendError::rejected(envelope.message))
        }
    }

    async fn delete_line(&self, line: CartLineId) -> Result<String, BackendError> {
        let body = DeleteLineRequest { id: &line };

        let envelope: Envelope<serde_json::Value> =
            Self::execute(self.request(&self.endpoints.delete_cart_line).json(&body)).await?;

        if envelope.success {
            Ok(envelope.message.unwrap_or_default())
        } else {
            Err(BackendError::rejected(envelope.message))
        }
    }

    async fn create_checkout_session(
        &self,
        cart: CartSnapshot,
    ) -> Result<Option<SessionId>, BackendError> {
        let body = CheckoutRequest { cart_items: &cart };

        let session: CheckoutSession =
            Self::execute(self.request(&self.endpoints.checkout).json(&body)).await?;

        Ok(session.id)
    }
}

#[async_trait]
impl CatalogBackend for StorefrontClient {
    async fn category_products(&self, category: String) -> Result<Vec<Product>, BackendError> {
        let body = CategoryRequest {
            category: &category,
        };

        let envelope: Envelope<Vec<Product>> =
            Self::execute(self.request(&self.endpoints.category_products).json(&body)).await?;

        envelope.into_data().map_err(BackendError::rejected)
    }
}
