//! Shared client-side state.
//!
//! DESIGN
//! ======
//! The whole page is one `storefront::engine::PageCore`, held in a single
//! `RwSignal` provided through context. Components read derived views from it
//! and send every input through [`page::dispatch`].

pub mod page;
