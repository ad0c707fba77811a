//! Cart

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{
    ids::TypedId,
    pricing::{self, PriceError},
    products::Product,
    quantity::Quantity,
};

/// Cart Line Id
pub type CartLineId = TypedId<CartLine>;

/// One product-quantity pairing held in the shopping cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Backend identifier, unique within the cart
    #[serde(rename = "_id")]
    pub id: CartLineId,

    /// Copy of the product this line refers to
    #[serde(rename = "productId")]
    pub product: Product,

    /// Units of the product in the cart
    pub quantity: Quantity,

    /// Owning user, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl CartLine {
    /// `quantity × selling price` for this line.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the price is unrepresentable or the product overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, PriceError> {
        let unit = pricing::to_minor_units(self.product.selling_price)?;

        unit.checked_mul(i64::from(self.quantity.get()))
            .map(pricing::rupees)
            .ok_or(PriceError::Overflow)
    }
}

/// A backend cart entry that could not be read as a [`CartLine`].
#[derive(Debug, Clone, PartialEq)]
pub struct UnreadableLine {
    /// The entry's `_id`, when it has one
    pub id: Option<CartLineId>,

    /// Why decoding failed
    pub reason: String,
}

/// The ordered set of cart lines as last fetched from the backend.
///
/// Decoding is per line: entries that do not form a valid [`CartLine`] (a quantity outside
/// `1..=9`, a product that no longer exists) are set aside as [`UnreadableLine`]s instead of
/// failing the whole cart. Lines decoded from the backend keep their original JSON and
/// serialize back exactly as received.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,

    // Empty, or the backend JSON of each entry in `lines`.
    wire: Vec<Value>,

    unreadable: Vec<UnreadableLine>,
}

impl CartSnapshot {
    /// An empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode backend cart entries one at a time.
    pub fn from_wire(entries: Vec<Value>) -> Self {
        let mut snapshot = Self::default();

        for entry in entries {
            match CartLine::deserialize(&entry) {
                Ok(line) => {
                    snapshot.lines.push(line);
                    snapshot.wire.push(entry);
                }
                Err(error) => snapshot.unreadable.push(UnreadableLine {
                    id: entry.get("_id").and_then(Value::as_str).map(CartLineId::new),
                    reason: error.to_string(),
                }),
            }
        }

        snapshot
    }

    /// Borrow the lines in backend order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over the lines in backend order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Find a line by id.
    pub fn line(&self, id: &CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Backend entries left out of the snapshot because they could not be decoded.
    pub fn unreadable(&self) -> &[UnreadableLine] {
        &self.unreadable
    }

    /// Sum of all line quantities; zero for an empty cart.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| u32::from(line.quantity)).sum()
    }

    /// Sum of `quantity × selling price` over all lines; zero rupees for an empty cart.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if any line total cannot be computed or the sum overflows.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, PriceError> {
        self.lines
            .iter()
            .try_fold(pricing::zero(), |acc, line| -> Result<_, PriceError> {
                Ok(acc.add(line.total()?)?)
            })
    }
}

impl From<Vec<CartLine>> for CartSnapshot {
    fn from(lines: Vec<CartLine>) -> Self {
        Self {
            lines,
            ..Self::default()
        }
    }
}

impl FromIterator<CartLine> for CartSnapshot {
    fn from_iter<I: IntoIterator<Item = CartLine>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Serialize for CartSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.wire.len() == self.lines.len() {
            self.wire.serialize(serializer)
        } else {
            self.lines.serialize(serializer)
        }
    }
}

impl<'de> Deserialize<'de> for CartSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Value>::deserialize(deserializer).map(Self::from_wire)
    }
}

impl<'a> IntoIterator for &'a CartSnapshot {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
