//! Inputs for creating and editing recipes.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::difficulty::Difficulty;
use super::ingredient::Ingredient;
use super::recipe::{normalize_steps, Recipe, RecipeStep};
use crate::id::new_id;

/// Reasons a recipe draft is rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Please enter a recipe title")]
    EmptyTitle,

    #[error("Please add at least one ingredient")]
    NoIngredients,

    #[error("Please add at least one step")]
    NoSteps,

    #[error("Servings must be at least 1")]
    InvalidServings,
}

/// Every recipe field except the ones the store assigns (id and timestamps).
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    pub tags: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub notes: Option<String>,
    pub is_favorite: bool,
}

impl NewRecipe {
    /// Starts a draft with the editor's defaults.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image: None,
            ingredients: Vec::new(),
            steps: Vec::new(),
            tags: Vec::new(),
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            difficulty: Difficulty::Easy,
            notes: None,
            is_favorite: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_steps(mut self, steps: Vec<RecipeStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Builds steps from plain instructions, numbered in the given order.
    pub fn with_instructions<I, S>(mut self, instructions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = instructions
            .into_iter()
            .enumerate()
            .map(|(index, text)| RecipeStep::new(new_id(), index as u32 + 1, text))
            .collect();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn with_cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = minutes;
        self
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn favorite(mut self) -> Self {
        self.is_favorite = true;
        self
    }

    /// Checks the draft the way the recipe editor does before submitting.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.title.trim().is_empty() {
            return Err(RecipeError::EmptyTitle);
        }
        if !self.ingredients.iter().any(|i| !i.name.trim().is_empty()) {
            return Err(RecipeError::NoIngredients);
        }
        if !self.steps.iter().any(|s| !s.instruction.trim().is_empty()) {
            return Err(RecipeError::NoSteps);
        }
        if self.servings == 0 {
            return Err(RecipeError::InvalidServings);
        }
        Ok(())
    }

    /// Trims text, drops blank ingredients and steps, and de-duplicates tags.
    pub fn sanitized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = non_blank(self.description);
        self.image = non_blank(self.image);
        self.notes = non_blank(self.notes);

        self.ingredients.retain(|i| !i.name.trim().is_empty());
        self.steps.retain(|s| !s.instruction.trim().is_empty());
        normalize_steps(&mut self.steps);

        let mut tags: Vec<String> = Vec::with_capacity(self.tags.len());
        for tag in self.tags {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        self.tags = tags;
        self
    }

    pub(crate) fn into_recipe(self, id: String, now: DateTime<Utc>) -> Recipe {
        let mut recipe = Recipe {
            id,
            title: self.title,
            description: self.description,
            image: self.image,
            ingredients: self.ingredients,
            steps: self.steps,
            tags: self.tags,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            difficulty: self.difficulty,
            notes: self.notes,
            is_favorite: self.is_favorite,
            created_at: now,
            updated_at: now,
        };
        recipe.normalize_steps();
        recipe.clamp_quantities();
        recipe
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A partial set of recipe fields to overwrite.
///
/// `None` leaves a field untouched. The optional text fields take
/// `Some(None)` to clear them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub image: Option<Option<String>>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub steps: Option<Vec<RecipeStep>>,
    pub tags: Option<Vec<String>>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub servings: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub notes: Option<Option<String>>,
    pub is_favorite: Option<bool>,
}

impl RecipeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn image(mut self, image: Option<String>) -> Self {
        self.image = Some(image);
        self
    }

    pub fn ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = Some(ingredients);
        self
    }

    pub fn steps(mut self, steps: Vec<RecipeStep>) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = Some(minutes);
        self
    }

    pub fn cook_time(mut self, minutes: u32) -> Self {
        self.cook_time = Some(minutes);
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn is_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = Some(is_favorite);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes the provided fields into `recipe`. Timestamps are left to the caller.
    pub(crate) fn apply_to(self, recipe: &mut Recipe) {
        if let Some(title) = self.title {
            recipe.title = title;
        }
        if let Some(description) = self.description {
            recipe.description = description;
        }
        if let Some(image) = self.image {
            recipe.image = image;
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
            recipe.clamp_quantities();
        }
        if let Some(mut steps) = self.steps {
            normalize_steps(&mut steps);
            recipe.steps = steps;
        }
        if let Some(tags) = self.tags {
            recipe.tags = tags;
        }
        if let Some(minutes) = self.prep_time {
            recipe.prep_time = minutes;
        }
        if let Some(minutes) = self.cook_time {
            recipe.cook_time = minutes;
        }
        if let Some(servings) = self.servings {
            recipe.servings = servings;
        }
        if let Some(difficulty) = self.difficulty {
            recipe.difficulty = difficulty;
        }
        if let Some(notes) = self.notes {
            recipe.notes = notes;
        }
        if let Some(is_favorite) = self.is_favorite {
            recipe.is_favorite = is_favorite;
        }
    }
}
