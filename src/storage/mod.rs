//! Storage layer for the draft assistant.
//!
//! Organized into logical components:
//! - `store`: the abstract player store and backend selection
//! - `schema`: SQLite connection and schema management
//! - `queries`: SQLite CRUD operations
//! - `json`: per-position JSON file fallback store
//!
//! The rest of the crate depends only on the [`PlayerStore`] trait; which
//! backend actually holds the data is decided once, at open time.

pub mod json;
pub mod queries;
pub mod schema;
pub mod store;


pub use json::JsonStore;
pub use schema::DraftDatabase;
pub use store::{open_store, PlayerStore, StoreKind};
