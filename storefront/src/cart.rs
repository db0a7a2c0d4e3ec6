//! Cart model: line items, identity-key merging, and derived totals.
//!
//! A line is "the same purchasable variant" as another when `(sku, color,
//! size)` match. Adding a duplicate merges quantities instead of appending a
//! row. Every line also carries a [`LineId`] that is assigned when the line is
//! created or loaded; per-row controls address lines by that id so two lines
//! with identical fields stay distinguishable.
//!
//! Quantities never leave `[MIN_QTY, MAX_QTY]`. Nothing here errors: out of
//! range requests clamp, and unknown ids return `None`.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::consts::{MAX_QTY, MIN_QTY};
use crate::money::Money;

/// Stable identifier for a line in the in-memory cart. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(Uuid);

impl LineId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Borrowed `(sku, color, size)` tuple deciding whether two lines merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemKey<'a> {
    pub sku: &'a str,
    pub color: &'a str,
    pub size: &'a str,
}

/// One variant/quantity entry in the cart.
///
/// Field names and order match the persisted blob; `image` is stored as `img`.
/// A stored negative price rejects the blob. A stored quantity of any numeric
/// shape (negative, fractional, huge) is truncated and clamped instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(skip, default)]
    pub id: LineId,
    pub sku: String,
    pub title: String,
    pub color: String,
    pub size: String,
    #[serde(deserialize_with = "deserialize_stored_price")]
    pub price: Money,
    #[serde(deserialize_with = "deserialize_stored_qty")]
    pub qty: u32,
    #[serde(rename = "img")]
    pub image: String,
}

impl LineItem {
    #[must_use]
    pub fn key(&self) -> ItemKey<'_> {
        ItemKey { sku: &self.sku, color: &self.color, size: &self.size }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.qty
    }

    /// Whether every field except the in-memory id matches.
    #[must_use]
    pub fn same_fields(&self, other: &Self) -> bool {
        self.key() == other.key()
            && self.title == other.title
            && self.price == other.price
            && self.qty == other.qty
            && self.image == other.image
    }
}

fn deserialize_stored_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
    let price = Money::deserialize(deserializer)?;
    if price < Money::ZERO {
        return Err(serde::de::Error::custom("stored price must not be negative"));
    }
    Ok(price)
}

fn deserialize_stored_qty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(clamp_qty_f64(value))
}

/// Truncate then clamp; `+inf` is the maximum, NaN and `-inf` the minimum.
#[allow(clippy::cast_possible_truncation)]
fn clamp_qty_f64(value: f64) -> u32 {
    if value.is_nan() {
        return MIN_QTY;
    }
    // `as` saturates, so infinities land on i64::MAX / i64::MIN.
    clamp_qty(value.trunc() as i64)
}

/// Clamp any requested quantity into `[MIN_QTY, MAX_QTY]`.
#[must_use]
pub fn clamp_qty(requested: i64) -> u32 {
    let clamped = requested.clamp(i64::from(MIN_QTY), i64::from(MAX_QTY));
    u32::try_from(clamped).unwrap_or(MIN_QTY)
}

/// Parse a direct-entry quantity field.
///
/// Anything that is not a non-zero number counts as 1. Fractions truncate and
/// the result is clamped, so `"Infinity"` and `"1e400"` give the maximum.
#[must_use]
pub fn parse_qty_input(text: &str) -> u32 {
    match text.trim().parse::<f64>() {
        Ok(value) if value != 0.0 => clamp_qty_f64(value),
        _ => MIN_QTY,
    }
}

/// Ordered list of line items. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from loaded lines, merging duplicates and clamping
    /// quantities so the cart invariants hold regardless of input.
    #[must_use]
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add_item(item);
        }
        cart
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: LineId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn get_mut(&mut self, id: LineId) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Merge `candidate` into the line with the same identity key, or append it.
    ///
    /// Returns the id of the line now holding the candidate's quantity.
    pub fn add_item(&mut self, mut candidate: LineItem) -> LineId {
        let added = i64::from(candidate.qty);
        if let Some(existing) = self.items.iter_mut().find(|item| item.key() == candidate.key()) {
            existing.qty = clamp_qty(i64::from(existing.qty) + added);
            return existing.id;
        }
        candidate.qty = clamp_qty(added);
        let id = candidate.id;
        self.items.push(candidate);
        id
    }

    /// Set a line's quantity, clamped. Returns the stored quantity.
    pub fn set_qty(&mut self, id: LineId, requested: i64) -> Option<u32> {
        let item = self.get_mut(id)?;
        item.qty = clamp_qty(requested);
        Some(item.qty)
    }

    pub fn increment(&mut self, id: LineId) -> Option<u32> {
        let current = self.get(id)?.qty;
        self.set_qty(id, i64::from(current) + 1)
    }

    pub fn decrement(&mut self, id: LineId) -> Option<u32> {
        let current = self.get(id)?.qty;
        self.set_qty(id, i64::from(current) - 1)
    }

    /// Apply a direct-entry quantity field to a line.
    pub fn set_qty_from_input(&mut self, id: LineId, text: &str) -> Option<u32> {
        let item = self.get_mut(id)?;
        item.qty = parse_qty_input(text);
        Some(item.qty)
    }

    /// Remove exactly the line with `id`.
    pub fn remove_item(&mut self, id: LineId) -> Option<LineItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Total units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|item| item.qty).sum()
    }

    /// Sum of price × quantity across all lines.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }
}
