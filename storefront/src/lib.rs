//! Product page engine: cart, gallery, variants, and the cart drawer.
//!
//! This crate holds every piece of product-page state that does not need a
//! browser. The frontend crate renders the view models defined here, turns DOM
//! events into [`engine::PageEvent`]s, and applies the
//! [`modal::ModalEffect`]s that come back. Persistence goes through the
//! [`store::KeyValueStorage`] seam so the whole engine runs in native tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::PageCore`] state container and the event-to-operation mapping |
//! | [`cart`] | Line items, identity-key merging, quantity clamping, totals |
//! | [`store`] | `localStorage`-shaped storage seam and the cart blob codec |
//! | [`gallery`] | Selected-image state machine with wrap-around navigation |
//! | [`variant`] | Exclusive color/size choice groups with fallback defaults |
//! | [`modal`] | Drawer open/close state, focus restore, and the focus loop |
//! | [`view`] | Cart drawer view model and per-row actions |
//! | [`money`] | Fixed-point currency amounts |
//! | [`config`] | Product configuration (catalog entry, images, options) |
//! | [`consts`] | Shared constants (quantity bounds, storage key, defaults) |

pub mod cart;
pub mod config;
pub mod consts;
pub mod engine;
pub mod gallery;
pub mod modal;
pub mod money;
pub mod store;
pub mod variant;
pub mod view;
