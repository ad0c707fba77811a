//! Catalog browsing

pub mod rails;
pub mod service;

pub use rails::{HOME_RAILS, HomeRail};
pub use service::CatalogService;
