//! Ten-pin bowling scorer (workspace facade crate).
//!
//! This package keeps the public `tenpin::{core,engine,types}` API in one
//! place while the implementation lives in dedicated crates under `crates/`.

pub use tenpin_core as core;
pub use tenpin_engine as engine;
pub use tenpin_types as types;
