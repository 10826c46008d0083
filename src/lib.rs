//! Blockfit (workspace facade crate).
//!
//! This package keeps the public `blockfit::{core,store,types}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use blockfit_core as core;
pub use blockfit_store as store;
pub use blockfit_types as types;
