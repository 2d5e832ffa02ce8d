use clap::{Args, Subcommand};
use std::io::{self, Write};

use recipebox_core::{GroceryItem, KeyValueStore, RecipeStore};

use super::{find_grocery_item, find_recipe, OutputFormat};

#[derive(Args)]
pub struct GroceryCommand {
    #[command(subcommand)]
    pub command: GrocerySubcommand,
}

#[derive(Subcommand)]
pub enum GrocerySubcommand {
    /// Show the grocery list, items to buy first
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add every ingredient of a recipe to the grocery list
    Add {
        /// Recipe ID or title
        recipe: String,
    },

    /// Check or uncheck an item
    Check {
        /// Item ID or name
        item: String,
    },

    /// Remove an item from the list
    Remove {
        /// Item ID or name
        item: String,
    },

    /// Remove every item from the list
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Remove purchased items
    ClearChecked,

    /// Print the items still to buy as plain text
    Share,
}

fn item_not_found(identifier: &str) -> Box<dyn std::error::Error> {
    format!("Grocery item not found: {}", identifier).into()
}

impl GroceryCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        store: &mut RecipeStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            GrocerySubcommand::List { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(store.grocery_list())?);
                    }
                    OutputFormat::Text => {
                        if store.grocery_list().is_empty() {
                            println!("Your grocery list is empty");
                            return Ok(());
                        }

                        let unchecked = store.unchecked_items();
                        let checked = store.checked_items();

                        println!("To buy ({})", unchecked.len());
                        print_items(&unchecked);

                        if !checked.is_empty() {
                            println!("\nPurchased ({})", checked.len());
                            print_items(&checked);
                        }
                    }
                }
                Ok(())
            }

            GrocerySubcommand::Add { recipe } => {
                let found = find_recipe(store, recipe)
                    .ok_or_else(|| format!("Recipe not found: {}", recipe))?;
                let (id, title) = (found.id.clone(), found.title.clone());

                let added = store.add_recipe_to_grocery_list(&id);
                println!("Added {} item(s) from '{}' to the grocery list", added.len(), title);
                Ok(())
            }

            GrocerySubcommand::Check { item } => {
                let id = find_grocery_item(store, item)
                    .ok_or_else(|| item_not_found(item))?
                    .id
                    .clone();

                store.toggle_grocery_item(&id);
                if let Some(updated) = store.grocery_item(&id) {
                    println!("{}", updated);
                }
                Ok(())
            }

            GrocerySubcommand::Remove { item } => {
                let found = find_grocery_item(store, item).ok_or_else(|| item_not_found(item))?;
                let (id, name) = (found.id.clone(), found.name.clone());

                store.remove_from_grocery_list(&id);
                println!("Removed '{}' from the grocery list", name);
                Ok(())
            }

            GrocerySubcommand::Clear { force } => {
                if !force {
                    print!(
                        "Remove all {} item(s) from the grocery list? [y/N] ",
                        store.grocery_list().len()
                    );
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Clear cancelled.");
                        return Ok(());
                    }
                }

                store.clear_grocery_list();
                println!("Grocery list cleared");
                Ok(())
            }

            GrocerySubcommand::ClearChecked => {
                let purchased = store.checked_items().len();
                store.clear_checked_items();
                println!("Removed {} purchased item(s)", purchased);
                Ok(())
            }

            GrocerySubcommand::Share => {
                let text = store.grocery_share_text();
                if text.is_empty() {
                    println!("Nothing left to buy");
                } else {
                    println!("Grocery List\n");
                    println!("{}", text);
                }
                Ok(())
            }
        }
    }
}

fn print_items(items: &[&GroceryItem]) {
    for item in items {
        println!("  {}", item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebox_core::MemoryStore;

    fn store() -> RecipeStore<MemoryStore> {
        RecipeStore::load(MemoryStore::new())
    }

    fn run(store: &mut RecipeStore<MemoryStore>, command: GrocerySubcommand) {
        GroceryCommand { command }.run(store).unwrap();
    }

    #[test]
    fn test_add_by_title() {
        let mut store = store();
        run(
            &mut store,
            GrocerySubcommand::Add {
                recipe: "classic spaghetti carbonara".into(),
            },
        );

        assert_eq!(store.grocery_list().len(), 5);
        assert_eq!(store.grocery_list()[0].recipe_id.as_deref(), Some("1"));
    }

    #[test]
    fn test_add_unknown_recipe_fails() {
        let mut store = store();
        let command = GroceryCommand {
            command: GrocerySubcommand::Add {
                recipe: "Pizza".into(),
            },
        };
        let err = command.run(&mut store).unwrap_err();
        assert_eq!(err.to_string(), "Recipe not found: Pizza");
        assert!(store.grocery_list().is_empty());
    }

    #[test]
    fn test_check_by_name_then_clear_checked() {
        let mut store = store();
        run(&mut store, GrocerySubcommand::Add { recipe: "3".into() });
        run(
            &mut store,
            GrocerySubcommand::Check {
                item: "coconut milk".into(),
            },
        );
        assert_eq!(store.checked_items().len(), 1);

        run(&mut store, GrocerySubcommand::ClearChecked);
        assert_eq!(store.grocery_list().len(), 4);
        assert!(store.grocery_list().iter().all(|i| i.name != "Coconut milk"));
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = store();
        run(&mut store, GrocerySubcommand::Add { recipe: "2".into() });
        let id = store.grocery_list()[0].id.clone();

        run(&mut store, GrocerySubcommand::Remove { item: id.clone() });
        assert!(store.grocery_item(&id).is_none());
        assert_eq!(store.grocery_list().len(), 4);

        run(&mut store, GrocerySubcommand::Clear { force: true });
        assert!(store.grocery_list().is_empty());
    }

    #[test]
    fn test_check_unknown_item_fails() {
        let mut store = store();
        let command = GroceryCommand {
            command: GrocerySubcommand::Check {
                item: "milk".into(),
            },
        };
        assert!(command.run(&mut store).is_err());
    }
}
