//! TechMart storefront client: cart controller, catalog browsing, hosted checkout hand-off
//! and image uploads over the storefront's REST backend.

pub mod backend;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod context;
pub mod observability;
pub mod payments;
pub mod uploads;
