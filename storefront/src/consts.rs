//! Shared constants for the storefront crate.

// ── Quantities ──────────────────────────────────────────────────

/// Smallest quantity a line item (or the product quantity field) may hold.
pub const MIN_QTY: u32 = 1;

/// Largest quantity a line item (or the product quantity field) may hold.
pub const MAX_QTY: u32 = 10;

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the serialized cart blob.
pub const STORAGE_KEY: &str = "mini-cart-v1";

// ── Variants ────────────────────────────────────────────────────

/// Color reported when no color choice is checked.
pub const DEFAULT_COLOR: &str = "Sand";

/// Size reported when no size choice is checked.
pub const DEFAULT_SIZE: &str = "M";

// ── Copy ────────────────────────────────────────────────────────

/// Message shown in the drawer when the cart has no items.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Marker stripped from thumbnail sources to get the cart line image.
pub const THUMB_MARKER: &str = "-thumb";

// ── DOM ids ─────────────────────────────────────────────────────

/// Id of the drawer's close button, the first control focused on open.
pub const CLOSE_CART_ID: &str = "closeCart";
