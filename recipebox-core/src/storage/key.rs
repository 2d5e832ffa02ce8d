//! Storage keys for the two persisted collections.

/// Collections that are persisted, one key each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Recipes,
    GroceryList,
}

impl StorageKey {
    pub const ALL: [StorageKey; 2] = [StorageKey::Recipes, StorageKey::GroceryList];

    /// Returns the key the collection is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Recipes => "recipes",
            StorageKey::GroceryList => "groceryList",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
