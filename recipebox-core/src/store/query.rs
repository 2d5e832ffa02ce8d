//! Read-only views over the store: search, favorites, stats and sharing.

use serde::Serialize;

use super::RecipeStore;
use crate::models::{Difficulty, GroceryItem, Recipe};
use crate::storage::KeyValueStore;

/// Criteria for browsing recipes. Empty criteria match every recipe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Case-insensitive text matched against title, ingredient names and tags
    pub query: Option<String>,
    /// Matches recipes carrying any of these tags
    pub tags: Vec<String>,
    pub difficulty: Option<Difficulty>,
    pub favorites_only: bool,
}

impl RecipeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn favorites_only(mut self) -> Self {
        self.favorites_only = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self.favorites_only && !recipe.is_favorite {
            return false;
        }

        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            let hit = recipe.title.to_lowercase().contains(&query)
                || recipe
                    .ingredients
                    .iter()
                    .any(|i| i.name.to_lowercase().contains(&query))
                || recipe.tags.iter().any(|t| t.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|tag| recipe.has_tag(tag)) {
            return false;
        }

        if let Some(difficulty) = self.difficulty {
            if recipe.difficulty != difficulty {
                return false;
            }
        }

        true
    }
}

/// Totals shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub recipes: usize,
    pub favorites: usize,
    pub grocery_items: usize,
    /// Prep plus cook time over every recipe, in minutes
    pub total_minutes: u64,
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Recipes matching `filter`, in collection order.
    pub fn filter_recipes(&self, filter: &RecipeFilter) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn favorites(&self) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite).collect()
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            recipes: self.recipes.len(),
            favorites: self.recipes.iter().filter(|r| r.is_favorite).count(),
            grocery_items: self.grocery_list.len(),
            total_minutes: self.recipes.iter().map(Recipe::total_time).sum(),
        }
    }

    pub fn unchecked_items(&self) -> Vec<&GroceryItem> {
        self.grocery_list.iter().filter(|i| !i.checked).collect()
    }

    pub fn checked_items(&self) -> Vec<&GroceryItem> {
        self.grocery_list.iter().filter(|i| i.checked).collect()
    }

    /// Plain-text list of the items still to buy, one per line.
    pub fn grocery_share_text(&self) -> String {
        self.grocery_list
            .iter()
            .filter(|i| !i.checked)
            .map(GroceryItem::share_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
