//! Browser glue shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `web-sys` call lives here, behind `csr` cfg blocks, so components and
//! state stay compilable (and testable) on the host.

pub mod dom;
pub mod storage;
