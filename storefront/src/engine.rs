//! Page state container and the event-to-operation mapping.
//!
//! [`PageCore`] owns every piece of product-page state and is the only thing
//! the frontend mutates. Each [`PageEvent`] maps to one typed operation; the
//! mapping lives in [`PageCore::dispatch`]. Operations run to completion, and
//! any cart mutation is saved before the operation returns.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::cart::{Cart, LineId, clamp_qty, parse_qty_input};
use crate::config::ProductConfig;
use crate::consts::{CLOSE_CART_ID, MIN_QTY};
use crate::gallery::{Gallery, GalleryImage};
use crate::modal::{Focusable, ModalController, ModalEffect};
use crate::store::{CartStore, KeyValueStorage, StoreError};
use crate::variant::VariantSelector;
use crate::view::{self, CartView, RowAction};

/// A discrete user input, already decoded from the DOM.
///
/// `active` fields carry the id of the element focused when the event fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ThumbClicked(usize),
    PrevImage,
    NextImage,
    HeroKey(String),
    ColorChosen(String),
    SizeChosen(String),
    IncQty,
    DecQty,
    QtyInput(String),
    AddToCart { active: Option<String> },
    BuyNow { active: Option<String> },
    OpenCart { active: Option<String> },
    CloseCart,
    DrawerClick { dismiss: bool },
    KeyDown { key: String, shift: bool, active: Option<String>, focusables: Vec<Focusable> },
    Row { id: LineId, action: RowAction },
    Checkout,
}

/// Product page state: config, cart, store, gallery, variants, quantity, drawer.
#[derive(Debug)]
pub struct PageCore<S> {
    config: ProductConfig,
    cart: Cart,
    store: CartStore<S>,
    gallery: Gallery,
    variants: VariantSelector,
    qty: u32,
    modal: ModalController,
    last_store_error: Option<StoreError>,
}

impl<S: KeyValueStorage> PageCore<S> {
    /// Build the page, loading any saved cart from `storage`.
    pub fn new(config: ProductConfig, storage: S) -> Self {
        let store = CartStore::with_key(storage, config.storage_key.clone());
        let cart = store.load_cart();
        log::debug!("page start: {} saved cart lines", cart.len());
        Self {
            gallery: Gallery::new(config.title.clone(), config.images.clone()),
            variants: VariantSelector::new(config.colors.clone(), config.sizes.clone()),
            cart,
            store,
            qty: MIN_QTY,
            modal: ModalController::new(CLOSE_CART_ID),
            last_store_error: None,
            config,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ProductConfig {
        &self.config
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn cart_view(&self) -> CartView {
        view::render(&self.cart)
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn variants(&self) -> &VariantSelector {
        &self.variants
    }

    /// Value of the product quantity field.
    #[must_use]
    pub fn qty(&self) -> u32 {
        self.qty
    }

    #[must_use]
    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    #[must_use]
    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    /// The error from the most recent save, cleared by the next successful one.
    #[must_use]
    pub fn last_store_error(&self) -> Option<&StoreError> {
        self.last_store_error.as_ref()
    }

    // --- Dispatch ---

    /// Run the operation mapped to `event`. Returns DOM effects for the drawer.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<ModalEffect> {
        match event {
            PageEvent::ThumbClicked(index) => {
                self.gallery.select(index);
                Vec::new()
            }
            PageEvent::PrevImage => {
                self.gallery.prev();
                Vec::new()
            }
            PageEvent::NextImage => {
                self.gallery.next();
                Vec::new()
            }
            PageEvent::HeroKey(key) => {
                self.gallery.handle_key(&key);
                Vec::new()
            }
            PageEvent::ColorChosen(value) => {
                self.variants.color.check(&value);
                Vec::new()
            }
            PageEvent::SizeChosen(value) => {
                self.variants.size.check(&value);
                Vec::new()
            }
            PageEvent::IncQty => {
                self.step_qty(1);
                Vec::new()
            }
            PageEvent::DecQty => {
                self.step_qty(-1);
                Vec::new()
            }
            PageEvent::QtyInput(text) => {
                self.qty = parse_qty_input(&text);
                Vec::new()
            }
            PageEvent::AddToCart { active } | PageEvent::BuyNow { active } => self.add_to_cart(active),
            PageEvent::OpenCart { active } => self.modal.open(active),
            PageEvent::CloseCart => self.modal.close(),
            PageEvent::DrawerClick { dismiss } => self.modal.click(dismiss),
            PageEvent::KeyDown { key, shift, active, focusables } => {
                self.modal.key_down(&key, shift, active.as_deref(), &focusables)
            }
            PageEvent::Row { id, action } => {
                self.row_action(id, &action);
                Vec::new()
            }
            PageEvent::Checkout => {
                self.checkout();
                Vec::new()
            }
        }
    }

    // --- Operations ---

    /// Move the product quantity field by `delta`, clamped.
    pub fn step_qty(&mut self, delta: i64) {
        self.qty = clamp_qty(i64::from(self.qty) + delta);
    }

    /// Add the selected variant at the field quantity, save, and open the drawer.
    ///
    /// "Buy now" maps here too; there is no separate checkout flow.
    pub fn add_to_cart(&mut self, active: Option<String>) -> Vec<ModalEffect> {
        let image = self.gallery.current_image().map(GalleryImage::cart_image).unwrap_or_default();
        let candidate = self.config.line_item(self.variants.color(), self.variants.size(), self.qty, image);
        self.cart.add_item(candidate);
        self.commit();
        self.modal.open(active)
    }

    /// Apply a cart row control and save when it hit a line.
    pub fn row_action(&mut self, id: LineId, action: &RowAction) -> bool {
        let applied = view::apply_row_action(&mut self.cart, id, action);
        if applied {
            self.commit();
        } else {
            log::debug!("row action {action:?} for missing line {id}");
        }
        applied
    }

    /// Checkout is out of scope for the demo page; it only logs.
    pub fn checkout(&self) {
        log::info!("checkout requested: {} items, subtotal {}", self.cart.count(), self.cart.subtotal());
    }

    /// Persist the cart after a mutation. Failures are logged and kept, never raised.
    fn commit(&mut self) {
        match self.store.save(self.cart.items()) {
            Ok(()) => self.last_store_error = None,
            Err(e) => {
                log::warn!("cart save failed: {e}");
                self.last_store_error = Some(e);
            }
        }
    }
}
