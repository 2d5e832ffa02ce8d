//! Recipe Box Core Library
//!
//! Recipe and grocery models plus the write-through store that owns them.

pub mod id;
pub mod models;
pub mod storage;
pub mod store;

pub use models::{
    Difficulty, GroceryItem, Ingredient, NewRecipe, Recipe, RecipeError, RecipeStep,
    RecipeUpdate, TAG_OPTIONS, UNIT_OPTIONS,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageKey};
pub use store::{RecipeFilter, RecipeStore, SnapshotError, StoreStats};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
