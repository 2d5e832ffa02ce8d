mod difficulty;
mod grocery_item;
mod ingredient;
mod new_recipe;
mod recipe;

pub use difficulty::Difficulty;
pub use grocery_item::GroceryItem;
pub(crate) use ingredient::clamp_quantity;
pub use ingredient::{Ingredient, UNIT_OPTIONS};
pub use new_recipe::{NewRecipe, RecipeError, RecipeUpdate};
pub use recipe::{normalize_steps, renumber_steps, Recipe, RecipeStep, TAG_OPTIONS};
