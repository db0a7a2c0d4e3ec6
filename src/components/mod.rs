//! Page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read `PageState` from context and route every input through
//! `state::page::dispatch`. None of them keep state of their own.

pub mod buy_box;
pub mod cart_button;
pub mod cart_drawer;
pub mod cart_row;
pub mod footer;
pub mod gallery;
