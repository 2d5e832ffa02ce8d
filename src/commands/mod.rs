mod config_cmd;
mod grocery;
mod recipe;
mod stats;

use clap::ValueEnum;
use recipebox_core::{GroceryItem, KeyValueStore, Recipe, RecipeStore};

pub use config_cmd::ConfigCommand;
pub use grocery::GroceryCommand;
pub use recipe::RecipeCommand;
pub use stats::StatsCommand;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Finds a recipe by id, falling back to a case-insensitive title match.
pub(crate) fn find_recipe<'a, S: KeyValueStore>(
    store: &'a RecipeStore<S>,
    identifier: &str,
) -> Option<&'a Recipe> {
    store.recipe(identifier).or_else(|| {
        store
            .recipes()
            .iter()
            .find(|r| r.title.eq_ignore_ascii_case(identifier.trim()))
    })
}

/// Finds a grocery item by id, falling back to a case-insensitive name match.
pub(crate) fn find_grocery_item<'a, S: KeyValueStore>(
    store: &'a RecipeStore<S>,
    identifier: &str,
) -> Option<&'a GroceryItem> {
    store.grocery_item(identifier).or_else(|| {
        store
            .grocery_list()
            .iter()
            .find(|i| i.name.eq_ignore_ascii_case(identifier.trim()))
    })
}
