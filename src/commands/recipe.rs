use clap::{Args, Subcommand};
use std::io::{self, Write};

use recipebox_core::{
    Difficulty, Ingredient, KeyValueStore, NewRecipe, RecipeFilter, RecipeStore, RecipeUpdate,
    TAG_OPTIONS, UNIT_OPTIONS,
};

use super::{find_recipe, OutputFormat};

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Create a new recipe
    Create {
        /// Title of the recipe
        title: String,

        /// Short description
        #[arg(long)]
        description: Option<String>,

        /// Image URL
        #[arg(long)]
        image: Option<String>,

        /// Ingredient as "QTY|UNIT|NAME", "QTY|NAME" or "NAME" (can be repeated)
        #[arg(long = "ingredient", value_name = "INGREDIENT", value_parser = parse_ingredient)]
        ingredients: Vec<Ingredient>,

        /// Instruction step, in order (can be repeated)
        #[arg(long = "step", value_name = "TEXT")]
        steps: Vec<String>,

        /// Tags (can be repeated)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Prep time in minutes
        #[arg(long, default_value_t = 10)]
        prep_time: u32,

        /// Cook time in minutes
        #[arg(long, default_value_t = 20)]
        cook_time: u32,

        /// Number of servings
        #[arg(long, default_value_t = 4)]
        servings: u32,

        /// Difficulty (easy, medium, hard)
        #[arg(long, default_value = "easy")]
        difficulty: Difficulty,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List recipes, newest first
    List {
        /// Search title, ingredients and tags
        #[arg(long, short)]
        query: Option<String>,

        /// Only recipes with any of these tags (can be repeated)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Only recipes of this difficulty
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Only favorites
        #[arg(long)]
        favorites: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's details
    Show {
        /// Recipe ID or title
        identifier: String,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Update an existing recipe
    Update {
        /// Recipe ID or title
        identifier: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,

        /// New notes (empty string clears it)
        #[arg(long)]
        notes: Option<String>,

        /// Prep time in minutes
        #[arg(long)]
        prep_time: Option<u32>,

        /// Cook time in minutes
        #[arg(long)]
        cook_time: Option<u32>,

        /// Number of servings
        #[arg(long)]
        servings: Option<u32>,

        /// Difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,

        /// Add a tag (can be repeated)
        #[arg(long = "add-tag", value_name = "TAG")]
        add_tags: Vec<String>,

        /// Remove a tag (can be repeated)
        #[arg(long = "remove-tag", value_name = "TAG")]
        remove_tags: Vec<String>,
    },

    /// Delete a recipe
    Delete {
        /// Recipe ID or title
        identifier: String,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },

    /// Mark or unmark a recipe as favorite
    Favorite {
        /// Recipe ID or title
        identifier: String,
    },

    /// Add an ingredient to a recipe
    AddIngredient {
        /// Recipe ID or title
        identifier: String,

        /// Ingredient as "QTY|UNIT|NAME", "QTY|NAME" or "NAME"
        #[arg(value_parser = parse_ingredient)]
        ingredient: Ingredient,
    },

    /// Remove an ingredient from a recipe
    RemoveIngredient {
        /// Recipe ID or title
        identifier: String,

        /// Ingredient ID or name
        ingredient: String,
    },

    /// Append a step to a recipe
    AddStep {
        /// Recipe ID or title
        identifier: String,

        /// Instruction text
        instruction: String,
    },

    /// Remove a step from a recipe
    RemoveStep {
        /// Recipe ID or title
        identifier: String,

        /// Step number
        number: u32,
    },

    /// Move a step to a new position
    MoveStep {
        /// Recipe ID or title
        identifier: String,

        /// Current step number
        from: u32,

        /// New step number
        to: u32,
    },

    /// List the suggested tags and units
    Options,
}

/// Parses "QTY|UNIT|NAME", "QTY|NAME" or "NAME".
pub fn parse_ingredient(s: &str) -> Result<Ingredient, String> {
    let parts: Vec<&str> = s.split('|').map(str::trim).collect();
    let (quantity, unit, name) = match parts.as_slice() {
        [name] => ("1", "", *name),
        [quantity, name] => (*quantity, "", *name),
        [quantity, unit, name] => (*quantity, *unit, *name),
        _ => return Err(format!("Invalid ingredient '{}'. Use QTY|UNIT|NAME", s)),
    };

    if name.is_empty() {
        return Err("Ingredient name cannot be empty".to_string());
    }
    let quantity: f64 = quantity
        .parse()
        .map_err(|_| format!("Invalid quantity '{}'", quantity))?;
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(format!("Quantity must be zero or more, got '{}'", quantity));
    }

    Ok(Ingredient::new(name, quantity, unit))
}

fn not_found(identifier: &str) -> Box<dyn std::error::Error> {
    format!("Recipe not found: {}", identifier).into()
}

impl RecipeCommand {
    pub fn run<S: KeyValueStore>(
        &self,
        store: &mut RecipeStore<S>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::Create {
                title,
                description,
                image,
                ingredients,
                steps,
                tags,
                prep_time,
                cook_time,
                servings,
                difficulty,
                notes,
            } => {
                let mut draft = NewRecipe::new(title)
                    .with_ingredients(ingredients.clone())
                    .with_instructions(steps.iter().cloned())
                    .with_tags(tags.clone())
                    .with_prep_time(*prep_time)
                    .with_cook_time(*cook_time)
                    .with_servings(*servings)
                    .with_difficulty(*difficulty);
                draft.description = description.clone();
                draft.image = image.clone();
                draft.notes = notes.clone();

                let draft = draft.sanitized();
                draft.validate()?;

                let created = store.add_recipe(draft);
                println!("Created recipe {}:", created.id);
                println!("{}", created);
                Ok(())
            }

            RecipeSubcommand::List {
                query,
                tags,
                difficulty,
                favorites,
                format,
            } => {
                let filter = RecipeFilter {
                    query: query.clone(),
                    tags: tags.clone(),
                    difficulty: *difficulty,
                    favorites_only: *favorites,
                };
                let recipes = store.filter_recipes(&filter);

                if recipes.is_empty() {
                    if filter.is_empty() {
                        println!("No recipes yet");
                    } else {
                        println!("No recipes found. Try adjusting your filters");
                    }
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&recipes)?);
                    }
                    OutputFormat::Text => {
                        println!(
                            "{:<36}  {:<30}  {:>6}  {:<6}  TAGS",
                            "ID", "TITLE", "TIME", "LEVEL"
                        );
                        println!("{}", "-".repeat(100));
                        for recipe in &recipes {
                            let heart = if recipe.is_favorite { "♥ " } else { "" };
                            let title = format!("{}{}", heart, recipe.title);
                            let title = if title.chars().count() > 30 {
                                format!("{}...", title.chars().take(27).collect::<String>())
                            } else {
                                title
                            };
                            println!(
                                "{:<36}  {:<30}  {:>3}min  {:<6}  {}",
                                recipe.id,
                                title,
                                recipe.total_time(),
                                recipe.difficulty,
                                recipe.tags.join(", ")
                            );
                        }
                        println!(
                            "\n{} recipe{}",
                            recipes.len(),
                            if recipes.len() == 1 { "" } else { "s" }
                        );
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Show { identifier, format } => {
                let recipe = find_recipe(store, identifier).ok_or_else(|| not_found(identifier))?;
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(recipe)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", recipe);
                        println!("ID: {}", recipe.id);
                        println!("Added: {}", recipe.created_at.format("%Y-%m-%d"));
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Update {
                identifier,
                title,
                description,
                notes,
                prep_time,
                cook_time,
                servings,
                difficulty,
                add_tags,
                remove_tags,
            } => {
                let recipe = find_recipe(store, identifier).ok_or_else(|| not_found(identifier))?;
                let id = recipe.id.clone();

                let mut update = RecipeUpdate::new();
                if let Some(title) = title {
                    if title.trim().is_empty() {
                        return Err("Recipe title cannot be empty".into());
                    }
                    update = update.title(title.trim());
                }
                if let Some(description) = description {
                    update = update.description(non_empty(description));
                }
                if let Some(notes) = notes {
                    update = update.notes(non_empty(notes));
                }
                if let Some(minutes) = prep_time {
                    update = update.prep_time(*minutes);
                }
                if let Some(minutes) = cook_time {
                    update = update.cook_time(*minutes);
                }
                if let Some(servings) = servings {
                    if *servings == 0 {
                        return Err("Servings must be at least 1".into());
                    }
                    update = update.servings(*servings);
                }
                if let Some(difficulty) = difficulty {
                    update = update.difficulty(*difficulty);
                }
                if !add_tags.is_empty() || !remove_tags.is_empty() {
                    let mut tags = recipe.tags.clone();
                    for tag in add_tags {
                        if !tags.contains(tag) {
                            tags.push(tag.clone());
                        }
                    }
                    tags.retain(|t| !remove_tags.contains(t));
                    update = update.tags(tags);
                }

                if update.is_empty() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                store.update_recipe(&id, update);
                if let Some(updated) = store.recipe(&id) {
                    println!("Updated recipe:");
                    println!("{}", updated);
                }
                Ok(())
            }

            RecipeSubcommand::Delete { identifier, force } => {
                let recipe = find_recipe(store, identifier).ok_or_else(|| not_found(identifier))?;
                let (id, title) = (recipe.id.clone(), recipe.title.clone());

                if !force {
                    print!("Delete recipe '{}'? [y/N] ", title);
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                store.delete_recipe(&id);
                println!("Deleted recipe: {}", title);
                Ok(())
            }

            RecipeSubcommand::Favorite { identifier } => {
                let id = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .id
                    .clone();

                store.toggle_favorite(&id);
                if let Some(recipe) = store.recipe(&id) {
                    if recipe.is_favorite {
                        println!("Added '{}' to favorites", recipe.title);
                    } else {
                        println!("Removed '{}' from favorites", recipe.title);
                    }
                }
                Ok(())
            }

            RecipeSubcommand::AddIngredient {
                identifier,
                ingredient,
            } => {
                let mut recipe = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .clone();

                recipe.add_ingredient(ingredient.clone());
                store.update_recipe(
                    &recipe.id,
                    RecipeUpdate::new().ingredients(recipe.ingredients.clone()),
                );

                println!("Added ingredient to '{}':", recipe.title);
                println!("  {}", ingredient);
                Ok(())
            }

            RecipeSubcommand::RemoveIngredient {
                identifier,
                ingredient,
            } => {
                let mut recipe = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .clone();

                let target = recipe
                    .ingredients
                    .iter()
                    .find(|i| i.id == *ingredient || i.name.eq_ignore_ascii_case(ingredient))
                    .map(|i| i.id.clone())
                    .ok_or_else(|| format!("Ingredient not found: {}", ingredient))?;

                recipe.remove_ingredient(&target);
                store.update_recipe(
                    &recipe.id,
                    RecipeUpdate::new().ingredients(recipe.ingredients.clone()),
                );

                println!("Removed ingredient '{}' from '{}'", ingredient, recipe.title);
                Ok(())
            }

            RecipeSubcommand::AddStep {
                identifier,
                instruction,
            } => {
                if instruction.trim().is_empty() {
                    return Err("Step instruction cannot be empty".into());
                }
                let mut recipe = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .clone();

                let order = recipe.add_step(instruction.trim()).order;
                store.update_recipe(
                    &recipe.id,
                    RecipeUpdate::new().steps(recipe.steps.clone()),
                );

                println!("Added step {} to '{}'", order, recipe.title);
                Ok(())
            }

            RecipeSubcommand::RemoveStep { identifier, number } => {
                let mut recipe = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .clone();

                let step_id = step_id_at(&recipe.steps, *number)?;
                recipe.remove_step(&step_id);
                store.update_recipe(
                    &recipe.id,
                    RecipeUpdate::new().steps(recipe.steps.clone()),
                );

                println!("Removed step {} from '{}'", number, recipe.title);
                Ok(())
            }

            RecipeSubcommand::MoveStep {
                identifier,
                from,
                to,
            } => {
                let mut recipe = find_recipe(store, identifier)
                    .ok_or_else(|| not_found(identifier))?
                    .clone();

                let step_id = step_id_at(&recipe.steps, *from)?;
                recipe.move_step(&step_id, *to as usize);
                store.update_recipe(
                    &recipe.id,
                    RecipeUpdate::new().steps(recipe.steps.clone()),
                );

                println!("Moved step {} to {} in '{}'", from, to, recipe.title);
                Ok(())
            }

            RecipeSubcommand::Options => {
                println!("Tags:  {}", TAG_OPTIONS.join(", "));
                println!("Units: {}", UNIT_OPTIONS.join(", "));
                println!(
                    "Difficulty: {}",
                    Difficulty::ALL
                        .iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                Ok(())
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn step_id_at(
    steps: &[recipebox_core::RecipeStep],
    number: u32,
) -> Result<String, Box<dyn std::error::Error>> {
    steps
        .iter()
        .find(|s| s.order == number)
        .map(|s| s.id.clone())
        .ok_or_else(|| format!("Step {} not found", number).into())
}
