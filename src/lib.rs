//! TUI Pairs (workspace facade crate).
//!
//! This package keeps the public `tui_pairs::{core,input,store,term,types}`
//! API in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_pairs_core as core;
pub use tui_pairs_input as input;
pub use tui_pairs_store as store;
pub use tui_pairs_term as term;
pub use tui_pairs_types as types;
