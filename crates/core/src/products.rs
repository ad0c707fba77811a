//! Products

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::{
    ids::TypedId,
    pricing::{self, PriceError},
};

/// Product Id
pub type ProductId = TypedId<Product>;

/// Product, as populated by the backend into cart lines and category listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Product name
    pub product_name: String,

    /// Brand name
    #[serde(default)]
    pub brand_name: String,

    /// Category slug, e.g. `"mobiles"`
    #[serde(default)]
    pub category: String,

    /// Image URLs, first one is the thumbnail
    #[serde(default)]
    pub product_image: Vec<String>,

    /// Long description
    #[serde(default)]
    pub description: String,

    /// List price in rupees
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Price actually charged in rupees
    #[serde(with = "rust_decimal::serde::float")]
    pub selling_price: Decimal,
}

impl Product {
    /// Unit selling price as INR money.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the selling price cannot be represented in paise.
    pub fn unit_price(&self) -> Result<Money<'static, Currency>, PriceError> {
        pricing::to_minor_units(self.selling_price).map(pricing::rupees)
    }

    /// The thumbnail image, if any.
    pub fn thumbnail(&self) -> Option<&str> {
        self.product_image.first().map(String::as_str)
    }
}
