//! Cart drawer view model.
//!
//! [`render`] is a pure function of the cart: the frontend throws away the
//! previous rows and draws exactly what it returns. Row controls come back as
//! [`RowAction`]s, applied with [`apply_row_action`].

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::cart::{Cart, LineId, LineItem};
use crate::consts::EMPTY_CART_MESSAGE;

/// A control on one cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Decrement,
    Increment,
    /// Direct entry in the row's quantity field (raw field text).
    SetQty(String),
    Remove,
}

/// Render state for one cart row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowView {
    pub id: LineId,
    pub image: String,
    pub title: String,
    /// `"{color} / {size}"`.
    pub meta: String,
    pub qty: u32,
    pub qty_label: String,
    pub line_total: String,
    pub remove_label: String,
}

impl CartRowView {
    fn from_item(item: &LineItem) -> Self {
        Self {
            id: item.id,
            image: item.image.clone(),
            title: item.title.clone(),
            meta: format!("{} / {}", item.color, item.size),
            qty: item.qty,
            qty_label: format!("Quantity for {}", item.title),
            line_total: item.line_total().to_string(),
            remove_label: format!("Remove {}", item.title),
        }
    }
}

/// What the drawer body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartBody {
    Empty(&'static str),
    Rows(Vec<CartRowView>),
}

/// Everything the drawer and the header badge display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub body: CartBody,
    pub subtotal: String,
    pub count: String,
}

/// Render the cart into its view model.
#[must_use]
pub fn render(cart: &Cart) -> CartView {
    let body = if cart.is_empty() {
        CartBody::Empty(EMPTY_CART_MESSAGE)
    } else {
        CartBody::Rows(cart.items().iter().map(CartRowView::from_item).collect())
    };
    CartView { body, subtotal: cart.subtotal().to_string(), count: cart.count().to_string() }
}

/// Apply a row control to the cart. Returns `false` when the row is gone.
pub fn apply_row_action(cart: &mut Cart, id: LineId, action: &RowAction) -> bool {
    match action {
        RowAction::Decrement => cart.decrement(id).is_some(),
        RowAction::Increment => cart.increment(id).is_some(),
        RowAction::SetQty(text) => cart.set_qty_from_input(id, text).is_some(),
        RowAction::Remove => cart.remove_item(id).is_some(),
    }
}
