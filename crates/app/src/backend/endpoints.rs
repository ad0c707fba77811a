//! Backend endpoint table.

use reqwest::Method;

/// One backend route: HTTP method plus path relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// HTTP method
    pub method: Method,

    /// Path, starting with `/`
    pub path: String,
}

impl Endpoint {
    /// Build an endpoint.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    /// Absolute URL for this endpoint under `base_url`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

/// The routes the storefront consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Read the current cart
    pub view_cart: Endpoint,

    /// Set a line's quantity
    pub update_cart_line: Endpoint,

    /// Delete a line
    pub delete_cart_line: Endpoint,

    /// Create a hosted payment session
    pub checkout: Endpoint,

    /// List products in a category
    pub category_products: Endpoint,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            view_cart: Endpoint::new(Method::GET, "/api/view-card-product"),
            update_cart_line: Endpoint::new(Method::POST, "/api/update-cart-product"),
            delete_cart_line: Endpoint::new(Method::POST, "/api/delete-cart-product"),
            checkout: Endpoint::new(Method::POST, "/api/checkout"),
            category_products: Endpoint::new(Method::POST, "/api/category-product"),
        }
    }
}
