//! Grocery list entries.
//!
//! Items are copied from a recipe's ingredients when the recipe is added to
//! the grocery list. They keep a provenance link to the recipe (`recipe_id`)
//! and a snapshot of its title, but never follow the recipe afterwards:
//! renaming or deleting the recipe leaves the items as they were.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{clamp_quantity, Ingredient, Recipe};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Whether this item has been purchased
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
}

impl GroceryItem {
    /// Copies an ingredient of `recipe` into an unchecked grocery item.
    pub fn from_ingredient(id: String, ingredient: &Ingredient, recipe: &Recipe) -> Self {
        Self {
            id,
            name: ingredient.name.clone(),
            quantity: clamp_quantity(ingredient.quantity),
            unit: ingredient.unit.clone(),
            checked: false,
            recipe_id: Some(recipe.id.clone()),
            recipe_name: Some(recipe.title.clone()),
        }
    }

    /// Line used when sharing the list as plain text.
    pub fn share_line(&self) -> String {
        let mark = if self.checked { '✓' } else { '○' };
        format!("{} {} {} {}", mark, self.quantity, self.unit, self.name)
    }
}

impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.checked { "[x]" } else { "[ ]" };
        if self.unit.is_empty() {
            write!(f, "{} {:<25} {}", check, self.name, self.quantity)?;
        } else {
            write!(f, "{} {:<25} {} {}", check, self.name, self.quantity, self.unit)?;
        }
        if let Some(recipe_name) = &self.recipe_name {
            write!(f, "  ({})", recipe_name)?;
        }
        Ok(())
    }
}
