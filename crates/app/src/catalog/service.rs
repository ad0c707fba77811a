//! Catalog service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use techmart::Product;
use tracing::warn;

use crate::{
    backend::CatalogBackend,
    catalog::rails::{HOME_RAILS, HomeRail},
};

/// Reads product listings for browsing. Failed reads yield empty listings.
#[derive(Clone)]
pub struct CatalogService {
    backend: Arc<dyn CatalogBackend>,
}

impl CatalogService {
    /// Create a catalog service over `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>) -> Self {
        Self { backend }
    }

    /// Products in `category`, empty when the backend call fails.
    pub async fn category_products(&self, category: &str) -> Vec<Product> {
        match self.backend.category_products(category.to_string()).await {
            Ok(products) => products,
            Err(error) => {
                warn!(category, %error, "category listing skipped");

                Vec::new()
            }
        }
    }

    /// Every home page rail with its products, in display order.
    pub async fn home(&self) -> Vec<(HomeRail, Vec<Product>)> {
        let mut rails = Vec::with_capacity(HOME_RAILS.len());

        for rail in HOME_RAILS {
            let products = self.category_products(rail.category).await;

            rails.push((rail, products));
        }

        rails
    }
}

impl Debug for CatalogService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CatalogService").finish_non_exhaustive()
    }
}
