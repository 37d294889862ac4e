//! Content loading for the Strata economy engine.
//!
//! Game content (planets, manager templates, miner skins) lives in data
//! files -- RON, JSON, or TOML, detected by extension -- and is resolved
//! into a frozen [`Catalog`](strata_core::catalog::Catalog) at startup.
//! The stock content that ships with the game is also available in code
//! via [`builtin::builtin_catalog`] so clients work without any data
//! directory.

pub mod builtin;
pub mod loader;
pub mod schema;

pub use builtin::builtin_catalog;
pub use loader::{DataLoadError, load_catalog};
