//! The recipe and grocery store.
//!
//! [`RecipeStore`] is the single owner of the recipe collection and the
//! grocery list. Consumers read through shared borrows and change state only
//! through the store's operations. Every operation finishes by writing the
//! full collection it targets back to storage (write-through):
//!
//! - `recipes`: the recipe collection, newest first
//! - `groceryList`: the grocery items, in insertion order
//!
//! Operations that name an unknown id leave the collections unchanged and do
//! not report an error. Storage failures are logged and otherwise ignored, so
//! memory and storage can diverge until the next successful write.

mod query;
mod seed;
mod snapshot;

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::id::unique_id;
use crate::models::{GroceryItem, NewRecipe, Recipe, RecipeUpdate};
use crate::storage::{KeyValueStore, StorageKey};

pub use query::{RecipeFilter, StoreStats};
pub use seed::seed_recipes;
pub use snapshot::{decode, encode, SnapshotError};

/// Entities kept in a collection with unique ids.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Recipe {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for GroceryItem {
    fn key(&self) -> &str {
        &self.id
    }
}

fn contains_id<T: Keyed>(items: &[T], id: &str) -> bool {
    items.iter().any(|item| item.key() == id)
}

/// Drops entries whose id was already seen. Returns how many were dropped.
fn dedup_ids<T: Keyed>(items: &mut Vec<T>) -> usize {
    let mut seen = std::collections::HashSet::new();
    let len_before = items.len();
    items.retain(|item| seen.insert(item.key().to_string()));
    len_before - items.len()
}

/// Reads and decodes one collection. Any failure yields `None`.
fn load_collection<S, T>(storage: &S, key: StorageKey) -> Option<Vec<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match storage.get(key.as_str()) {
        Ok(Some(raw)) => match decode(key, &raw) {
            Ok(items) => Some(items),
            Err(e) => {
                tracing::warn!("{}; using defaults", e);
                None
            }
        },
        Ok(None) => {
            tracing::debug!("No {} snapshot found, using defaults", key);
            None
        }
        Err(e) => {
            tracing::warn!("Failed to read {} snapshot: {}; using defaults", key, e);
            None
        }
    }
}

/// Owner of the recipe collection and the grocery list.
pub struct RecipeStore<S: KeyValueStore> {
    recipes: Vec<Recipe>,
    grocery_list: Vec<GroceryItem>,
    storage: S,
}

impl<S: KeyValueStore> RecipeStore<S> {
    /// Loads both collections from `storage`.
    ///
    /// A missing or unreadable `recipes` snapshot falls back to the sample
    /// recipes; a missing or unreadable `groceryList` falls back to an empty
    /// list. The loaded state is written back once so storage always holds a
    /// readable snapshot afterwards.
    pub fn load(storage: S) -> Self {
        let mut recipes: Vec<Recipe> =
            load_collection(&storage, StorageKey::Recipes).unwrap_or_else(seed_recipes);
        let mut grocery_list: Vec<GroceryItem> =
            load_collection(&storage, StorageKey::GroceryList).unwrap_or_default();

        let dropped = dedup_ids(&mut recipes);
        if dropped > 0 {
            tracing::warn!("Dropped {} stored recipe(s) with duplicate ids", dropped);
        }
        let dropped = dedup_ids(&mut grocery_list);
        if dropped > 0 {
            tracing::warn!("Dropped {} stored grocery item(s) with duplicate ids", dropped);
        }
        for recipe in &mut recipes {
            recipe.normalize_steps();
        }

        tracing::debug!(
            "Loaded {} recipe(s) and {} grocery item(s)",
            recipes.len(),
            grocery_list.len()
        );

        let mut store = Self {
            recipes,
            grocery_list,
            storage,
        };
        for key in StorageKey::ALL {
            store.persist(key);
        }
        store
    }

    // ========== Read access ==========

    /// All recipes, newest first.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// All grocery items, in the order they were added.
    pub fn grocery_list(&self) -> &[GroceryItem] {
        &self.grocery_list
    }

    pub fn recipe(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn grocery_item(&self, id: &str) -> Option<&GroceryItem> {
        self.grocery_list.iter().find(|i| i.id == id)
    }

    /// The storage adapter the store writes through to.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========== Recipe operations ==========

    /// Creates a recipe from `draft` and puts it first in the collection.
    ///
    /// The store assigns the id and both timestamps. The draft is expected to
    /// be validated by the caller (see [`NewRecipe::validate`]).
    pub fn add_recipe(&mut self, draft: NewRecipe) -> &Recipe {
        let id = unique_id(|id| contains_id(&self.recipes, id));
        let recipe = draft.into_recipe(id, Utc::now());
        tracing::debug!("Adding recipe {} ({})", recipe.id, recipe.title);

        self.recipes.insert(0, recipe);
        self.persist(StorageKey::Recipes);
        &self.recipes[0]
    }

    /// Overwrites the provided fields of a recipe and refreshes `updated_at`.
    pub fn update_recipe(&mut self, id: &str, update: RecipeUpdate) {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            update.apply_to(recipe);
            recipe.updated_at = Utc::now();
        }
        self.persist(StorageKey::Recipes);
    }

    /// Removes a recipe. Grocery items copied from it are kept.
    pub fn delete_recipe(&mut self, id: &str) {
        self.recipes.retain(|r| r.id != id);
        self.persist(StorageKey::Recipes);
    }

    /// Flips the favorite flag. `updated_at` is left unchanged.
    pub fn toggle_favorite(&mut self, id: &str) {
        if let Some(recipe) = self.recipes.iter_mut().find(|r| r.id == id) {
            recipe.is_favorite = !recipe.is_favorite;
        }
        self.persist(StorageKey::Recipes);
    }

    // ========== Grocery operations ==========

    /// Appends one unchecked grocery item per ingredient of `recipe`.
    ///
    /// Adding the same recipe twice adds its ingredients twice. Returns the
    /// newly added items.
    pub fn add_to_grocery_list(&mut self, recipe: &Recipe) -> &[GroceryItem] {
        let start = self.grocery_list.len();
        for ingredient in &recipe.ingredients {
            let id = unique_id(|id| contains_id(&self.grocery_list, id));
            self.grocery_list
                .push(GroceryItem::from_ingredient(id, ingredient, recipe));
        }
        tracing::debug!(
            "Added {} grocery item(s) from recipe {}",
            self.grocery_list.len() - start,
            recipe.id
        );

        self.persist(StorageKey::GroceryList);
        &self.grocery_list[start..]
    }

    /// Same as [`add_to_grocery_list`](Self::add_to_grocery_list) for a stored
    /// recipe looked up by id. An unknown id adds nothing.
    pub fn add_recipe_to_grocery_list(&mut self, recipe_id: &str) -> &[GroceryItem] {
        match self.recipe(recipe_id).cloned() {
            Some(recipe) => self.add_to_grocery_list(&recipe),
            None => {
                self.persist(StorageKey::GroceryList);
                &self.grocery_list[self.grocery_list.len()..]
            }
        }
    }

    pub fn remove_from_grocery_list(&mut self, id: &str) {
        self.grocery_list.retain(|i| i.id != id);
        self.persist(StorageKey::GroceryList);
    }

    /// Flips an item's purchased flag.
    pub fn toggle_grocery_item(&mut self, id: &str) {
        if let Some(item) = self.grocery_list.iter_mut().find(|i| i.id == id) {
            item.checked = !item.checked;
        }
        self.persist(StorageKey::GroceryList);
    }

    pub fn clear_grocery_list(&mut self) {
        self.grocery_list.clear();
        self.persist(StorageKey::GroceryList);
    }

    /// Removes purchased items; the rest keep their order.
    pub fn clear_checked_items(&mut self) {
        self.grocery_list.retain(|i| !i.checked);
        self.persist(StorageKey::GroceryList);
    }

    // ========== Persistence ==========

    /// Writes the full collection for `key` to storage.
    fn persist(&mut self, key: StorageKey) {
        let snapshot = match key {
            StorageKey::Recipes => encode(key, &self.recipes),
            StorageKey::GroceryList => encode(key, &self.grocery_list),
        };

        let json = match snapshot {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("{}", e);
                return;
            }
        };

        match self.storage.set(key.as_str(), &json) {
            Ok(()) => tracing::debug!("Saved {} snapshot ({} bytes)", key, json.len()),
            Err(e) => tracing::warn!("Failed to save {} snapshot: {}", key, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Ingredient, RecipeStep};
    use crate::storage::{MemoryStore, StorageError};
    use std::collections::HashSet;

    /// Memory storage that records every write and can be told to fail.
    #[derive(Default)]
    struct RecordingStore {
        inner: MemoryStore,
        writes: Vec<String>,
        fail_writes: bool,
    }

    impl KeyValueStore for RecordingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.writes.push(key.to_string());
            if self.fail_writes {
                return Err(StorageError::Backend("disk full".into()));
            }
            self.inner.set(key, value)
        }
    }

    fn fresh_store() -> RecipeStore<MemoryStore> {
        RecipeStore::load(MemoryStore::new())
    }

    fn stored(store: &RecipeStore<MemoryStore>, key: StorageKey) -> String {
        store.storage().get(key.as_str()).unwrap().unwrap()
    }

    fn snapshots(store: &RecipeStore<MemoryStore>) -> (String, String) {
        (
            stored(store, StorageKey::Recipes),
            stored(store, StorageKey::GroceryList),
        )
    }

    fn draft(title: &str) -> NewRecipe {
        NewRecipe::new(title)
            .with_ingredients(vec![
                Ingredient::new("Rice", 1.0, "cup"),
                Ingredient::new("Water", 2.0, "cup"),
            ])
            .with_instructions(["Rinse", "Boil", "Steam"])
    }

    // ----- Loading -----

    #[test]
    fn test_load_empty_storage_uses_seed() {
        let store = fresh_store();
        assert_eq!(store.recipes().len(), 3);
        assert!(store.grocery_list().is_empty());
    }

    #[test]
    fn test_load_writes_initial_snapshots() {
        let store = fresh_store();
        let (recipes, grocery) = snapshots(&store);

        let parsed: Vec<Recipe> = decode(StorageKey::Recipes, &recipes).unwrap();
        assert_eq!(parsed, seed_recipes());
        assert_eq!(grocery, "[]");
    }

    #[test]
    fn test_load_restores_saved_state() {
        let mut store = fresh_store();
        store.add_recipe(draft("Rice"));
        store.add_recipe_to_grocery_list("2");

        let reloaded = RecipeStore::load(store.storage().clone());
        assert_eq!(reloaded.recipes(), store.recipes());
        assert_eq!(reloaded.grocery_list(), store.grocery_list());
        assert_eq!(reloaded.recipes()[0].created_at, store.recipes()[0].created_at);
    }

    #[test]
    fn test_non_finite_quantities_survive_reload() {
        let mut store = fresh_store();

        let mut huge = draft("Huge");
        huge.ingredients[0].quantity = f64::INFINITY;
        let huge_id = store.add_recipe(huge).id.clone();

        let plain_id = store.add_recipe(draft("Plain")).id.clone();
        let mut ingredients = store.recipe(&plain_id).unwrap().ingredients.clone();
        ingredients[1].quantity = f64::NAN;
        store.update_recipe(&plain_id, RecipeUpdate::new().ingredients(ingredients));

        let mut external = store.recipe(&huge_id).unwrap().clone();
        external.ingredients[1].quantity = f64::NEG_INFINITY;
        store.add_to_grocery_list(&external);

        let reloaded = RecipeStore::load(store.storage().clone());
        assert_eq!(reloaded.recipes().len(), 5);
        assert_eq!(reloaded.recipes(), store.recipes());
        assert_eq!(reloaded.recipe(&huge_id).unwrap().ingredients[0].quantity, 0.0);
        assert_eq!(reloaded.recipe(&plain_id).unwrap().ingredients[1].quantity, 0.0);
        assert_eq!(reloaded.grocery_list().len(), 2);
        assert_eq!(reloaded.grocery_list()[1].quantity, 0.0);
    }

    #[test]
    fn test_load_corrupt_recipes_falls_back_independently() {
        let grocery = r#"[{"id":"g1","name":"Milk","quantity":1,"unit":"L","checked":false}]"#;
        let storage = MemoryStore::new()
            .with_entry("recipes", "{{ definitely not json")
            .with_entry("groceryList", grocery);

        let store = RecipeStore::load(storage);
        assert_eq!(store.recipes(), seed_recipes().as_slice());
        assert_eq!(store.grocery_list().len(), 1);
        assert_eq!(store.grocery_list()[0].name, "Milk");
    }

    #[test]
    fn test_load_corrupt_grocery_list_falls_back_to_empty() {
        let storage = MemoryStore::new().with_entry("groceryList", "[{\"id\": 7}]");
        let store = RecipeStore::load(storage);
        assert!(store.grocery_list().is_empty());
        assert_eq!(store.recipes().len(), 3);
    }

    #[test]
    fn test_load_empty_recipe_array_is_respected() {
        let storage = MemoryStore::new().with_entry("recipes", "[]");
        let store = RecipeStore::load(storage);
        assert!(store.recipes().is_empty());
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let grocery = r#"[
            {"id":"g1","name":"Milk","quantity":1,"unit":"L","checked":false},
            {"id":"g1","name":"Bread","quantity":1,"unit":"piece","checked":true}
        ]"#;
        let storage = MemoryStore::new().with_entry("groceryList", grocery);

        let store = RecipeStore::load(storage);
        assert_eq!(store.grocery_list().len(), 1);
        assert_eq!(store.grocery_list()[0].name, "Milk");
    }

    #[test]
    fn test_load_normalizes_step_order() {
        let mut recipes = seed_recipes();
        recipes[0].steps[0].order = 10;
        recipes[0].steps[1].order = 30;
        let raw = encode(StorageKey::Recipes, &recipes).unwrap();

        let store = RecipeStore::load(MemoryStore::new().with_entry("recipes", raw));
        let orders: Vec<u32> = store.recipes()[0].steps.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }

    // ----- Recipes -----

    #[test]
    fn test_add_recipe_is_newest_first() {
        let mut store = fresh_store();
        let id = store.add_recipe(draft("Rice")).id.clone();

        assert_eq!(store.recipes().len(), 4);
        assert_eq!(store.recipes()[0].id, id);
        assert_eq!(store.recipes()[1].id, "1");
    }

    #[test]
    fn test_add_recipe_assigns_id_and_timestamps() {
        let mut store = fresh_store();
        let before = Utc::now();
        let recipe = store.add_recipe(draft("Rice")).clone();

        assert!(!recipe.id.is_empty());
        assert_eq!(recipe.created_at, recipe.updated_at);
        assert!(recipe.created_at >= before);
        assert_eq!(recipe.title, "Rice");
        assert_eq!(recipe.ingredients.len(), 2);
    }

    #[test]
    fn test_add_recipe_ids_unique() {
        let mut store = fresh_store();
        for i in 0..50 {
            store.add_recipe(draft(&format!("Rice {}", i)));
        }
        let ids: HashSet<_> = store.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), 53);
    }

    #[test]
    fn test_add_recipe_normalizes_steps() {
        let mut store = fresh_store();
        let steps = vec![
            RecipeStep::new("a", 3, "Serve"),
            RecipeStep::new("b", 1, "Chop"),
        ];
        let recipe = store.add_recipe(draft("Salad").with_steps(steps));

        assert_eq!(recipe.steps[0].id, "b");
        assert_eq!(recipe.steps[0].order, 1);
        assert_eq!(recipe.steps[1].order, 2);
    }

    #[test]
    fn test_add_recipe_persists() {
        let mut store = fresh_store();
        let id = store.add_recipe(draft("Rice")).id.clone();

        let parsed: Vec<Recipe> =
            decode(StorageKey::Recipes, &stored(&store, StorageKey::Recipes)).unwrap();
        assert_eq!(parsed[0].id, id);
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_update_recipe() {
        let mut store = fresh_store();
        let before = store.recipe("2").unwrap().clone();

        store.update_recipe(
            "2",
            RecipeUpdate::new()
                .title("Avocado Toast")
                .difficulty(Difficulty::Hard)
                .servings(2),
        );

        let after = store.recipe("2").unwrap();
        assert_eq!(after.title, "Avocado Toast");
        assert_eq!(after.difficulty, Difficulty::Hard);
        assert_eq!(after.servings, 2);
        assert_eq!(after.ingredients, before.ingredients);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
        // Position is preserved
        assert_eq!(store.recipes()[1].id, "2");
    }

    #[test]
    fn test_update_recipe_steps_renumbered() {
        let mut store = fresh_store();
        let mut recipe = store.recipe("1").unwrap().clone();
        let second = recipe.steps[1].id.clone();
        recipe.remove_step(&second);
        recipe.add_step("Serve immediately.");

        store.update_recipe("1", RecipeUpdate::new().steps(recipe.steps));

        let orders: Vec<u32> = store.recipe("1").unwrap().steps.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_delete_recipe_keeps_order() {
        let mut store = fresh_store();
        store.delete_recipe("2");

        let ids: Vec<_> = store.recipes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(!stored(&store, StorageKey::Recipes).contains("Avocado Toast"));
    }

    #[test]
    fn test_delete_recipe_does_not_cascade() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("3");
        store.delete_recipe("3");

        assert_eq!(store.grocery_list().len(), 5);
        assert!(store
            .grocery_list()
            .iter()
            .all(|i| i.recipe_id.as_deref() == Some("3")));
    }

    #[test]
    fn test_toggle_favorite_keeps_updated_at() {
        let mut store = fresh_store();
        let before = store.recipe("2").unwrap().clone();

        store.toggle_favorite("2");
        let after = store.recipe("2").unwrap();
        assert!(after.is_favorite);
        assert_eq!(after.updated_at, before.updated_at);

        store.toggle_favorite("2");
        assert!(!store.recipe("2").unwrap().is_favorite);
    }

    #[test]
    fn test_missing_id_operations_are_noops() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        let before = snapshots(&store);
        let recipes_before = store.recipes().to_vec();

        store.update_recipe("missing", RecipeUpdate::new().title("Ghost"));
        store.delete_recipe("missing");
        store.toggle_favorite("missing");
        store.remove_from_grocery_list("missing");
        store.toggle_grocery_item("missing");
        store.add_recipe_to_grocery_list("missing");

        assert_eq!(snapshots(&store), before);
        assert_eq!(store.recipes(), recipes_before.as_slice());
    }

    // ----- Grocery list -----

    #[test]
    fn test_add_to_grocery_list() {
        let mut store = fresh_store();
        let recipe = store.recipe("2").unwrap().clone();

        let added = store.add_to_grocery_list(&recipe).to_vec();
        assert_eq!(added.len(), recipe.ingredients.len());
        for (item, ingredient) in added.iter().zip(&recipe.ingredients) {
            assert_eq!(item.name, ingredient.name);
            assert_eq!(item.quantity, ingredient.quantity);
            assert_eq!(item.unit, ingredient.unit);
            assert!(!item.checked);
            assert_eq!(item.recipe_id.as_deref(), Some("2"));
            assert_eq!(item.recipe_name.as_deref(), Some("Avocado Toast with Poached Eggs"));
        }
    }

    #[test]
    fn test_add_to_grocery_list_twice_duplicates() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        store.add_recipe_to_grocery_list("1");

        assert_eq!(store.grocery_list().len(), 10);
        let ids: HashSet<_> = store.grocery_list().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_add_to_grocery_list_appends_after_existing() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        let first_id = store.grocery_list()[0].id.clone();
        store.toggle_grocery_item(&first_id);

        store.add_recipe_to_grocery_list("3");
        assert_eq!(store.grocery_list()[0].id, first_id);
        assert!(store.grocery_list()[0].checked);
        assert_eq!(store.grocery_list()[5].name, "Chicken breast");
    }

    #[test]
    fn test_recipe_name_is_snapshot() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        store.update_recipe("1", RecipeUpdate::new().title("Carbonara"));

        assert!(store
            .grocery_list()
            .iter()
            .all(|i| i.recipe_name.as_deref() == Some("Classic Spaghetti Carbonara")));
    }

    #[test]
    fn test_remove_from_grocery_list() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        let id = store.grocery_list()[2].id.clone();

        store.remove_from_grocery_list(&id);
        assert_eq!(store.grocery_list().len(), 4);
        assert!(store.grocery_item(&id).is_none());
        assert!(!stored(&store, StorageKey::GroceryList).contains(&id));
    }

    #[test]
    fn test_clear_grocery_list() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        store.clear_grocery_list();

        assert!(store.grocery_list().is_empty());
        assert_eq!(stored(&store, StorageKey::GroceryList), "[]");
    }

    #[test]
    fn test_clear_checked_items() {
        let mut store = fresh_store();
        store.add_recipe_to_grocery_list("1");
        store.add_recipe_to_grocery_list("2");
        let ids: Vec<String> = store.grocery_list().iter().map(|i| i.id.clone()).collect();
        for id in ids.iter().step_by(3) {
            store.toggle_grocery_item(id);
        }
        let expected: Vec<GroceryItem> = store
            .grocery_list()
            .iter()
            .filter(|i| !i.checked)
            .cloned()
            .collect();

        store.clear_checked_items();
        assert_eq!(store.grocery_list().len(), 6);
        assert_eq!(store.grocery_list(), expected.as_slice());
    }

    // ----- Write-through -----

    #[test]
    fn test_every_operation_writes_its_collection() {
        let mut store = RecipeStore::load(RecordingStore::default());
        assert_eq!(store.storage().writes, vec!["recipes", "groceryList"]);

        let recipe = store.add_recipe(draft("Rice")).clone();
        store.update_recipe(&recipe.id, RecipeUpdate::new().servings(6));
        store.toggle_favorite(&recipe.id);
        store.add_to_grocery_list(&recipe);
        let item_id = store.grocery_list()[0].id.clone();
        store.toggle_grocery_item(&item_id);
        store.clear_checked_items();
        store.remove_from_grocery_list(&item_id);
        store.clear_grocery_list();
        store.delete_recipe(&recipe.id);

        assert_eq!(
            store.storage().writes[2..],
            [
                "recipes",
                "recipes",
                "recipes",
                "groceryList",
                "groceryList",
                "groceryList",
                "groceryList",
                "groceryList",
                "recipes",
            ]
        );
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let storage = RecordingStore {
            fail_writes: true,
            ..Default::default()
        };
        let mut store = RecipeStore::load(storage);

        store.add_recipe(draft("Rice"));
        assert_eq!(store.recipes().len(), 4);
        assert!(store.storage().inner.is_empty());
    }

    // ----- End to end -----

    #[test]
    fn test_grocery_flow_from_empty_storage() {
        let mut store = fresh_store();
        assert_eq!(store.recipes().len(), 3);
        assert!(store.grocery_list().is_empty());

        let carbonara = store.recipe("1").unwrap().clone();
        store.add_to_grocery_list(&carbonara);
        assert_eq!(store.grocery_list().len(), 5);
        for item in store.grocery_list() {
            assert!(!item.checked);
            assert_eq!(item.recipe_id.as_deref(), Some("1"));
            assert_eq!(item.recipe_name.as_deref(), Some("Classic Spaghetti Carbonara"));
        }

        let first = store.grocery_list()[0].id.clone();
        store.toggle_grocery_item(&first);
        assert!(store.grocery_list()[0].checked);
        assert!(store.grocery_list()[1..].iter().all(|i| !i.checked));

        store.clear_checked_items();
        assert_eq!(store.grocery_list().len(), 4);

        let reloaded = RecipeStore::load(store.storage().clone());
        assert_eq!(reloaded.grocery_list().len(), 4);
    }
}
