use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::difficulty::Difficulty;
use super::ingredient::Ingredient;
use crate::id::unique_id;

/// Tags offered by the recipe editor.
pub const TAG_OPTIONS: [&str; 18] = [
    "Breakfast",
    "Lunch",
    "Dinner",
    "Dessert",
    "Snack",
    "Vegetarian",
    "Vegan",
    "Gluten-Free",
    "Dairy-Free",
    "Quick Meal",
    "Comfort Food",
    "Healthy",
    "Keto",
    "Italian",
    "Mexican",
    "Asian",
    "American",
    "Mediterranean",
];

/// One instruction in a recipe. `order` is 1-based and contiguous.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeStep {
    pub id: String,
    pub order: u32,
    pub instruction: String,
}

impl RecipeStep {
    pub fn new(id: impl Into<String>, order: u32, instruction: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            order,
            instruction: instruction.into(),
        }
    }
}

/// Sorts steps by their `order` field (stable) and renumbers them `1..=N`.
pub fn normalize_steps(steps: &mut [RecipeStep]) {
    steps.sort_by_key(|s| s.order);
    renumber_steps(steps);
}

/// Renumbers steps `1..=N` following their position in the slice.
pub fn renumber_steps(steps: &mut [RecipeStep]) {
    for (index, step) in steps.iter_mut().enumerate() {
        step.order = index as u32 + 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
    pub tags: Vec<String>,
    pub prep_time: u32, // minutes
    pub cook_time: u32, // minutes
    pub servings: u32,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Prep plus cook time in minutes.
    pub fn total_time(&self) -> u64 {
        u64::from(self.prep_time) + u64::from(self.cook_time)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn ingredient(&self, id: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.id == id)
    }

    pub fn step(&self, id: &str) -> Option<&RecipeStep> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Appends an ingredient, replacing its id if another ingredient already uses it.
    pub fn add_ingredient(&mut self, mut ingredient: Ingredient) {
        ingredient.clamp_quantity();
        if self.ingredient(&ingredient.id).is_some() {
            ingredient.id = unique_id(|id| self.ingredient(id).is_some());
        }
        self.ingredients.push(ingredient);
    }

    /// Removes an ingredient by id. Returns true if one was removed.
    pub fn remove_ingredient(&mut self, id: &str) -> bool {
        let len_before = self.ingredients.len();
        self.ingredients.retain(|i| i.id != id);
        self.ingredients.len() != len_before
    }

    /// Appends a step numbered after the current last step.
    pub fn add_step(&mut self, instruction: impl Into<String>) -> &RecipeStep {
        let id = unique_id(|id| self.step(id).is_some());
        let order = self.steps.len() as u32 + 1;
        self.steps.push(RecipeStep::new(id, order, instruction));
        &self.steps[self.steps.len() - 1]
    }

    /// Removes a step by id and closes the gap in the numbering.
    pub fn remove_step(&mut self, id: &str) -> bool {
        let len_before = self.steps.len();
        self.steps.retain(|s| s.id != id);
        renumber_steps(&mut self.steps);
        self.steps.len() != len_before
    }

    /// Moves a step to a 1-based position (clamped to the valid range).
    pub fn move_step(&mut self, id: &str, position: usize) -> bool {
        let Some(from) = self.steps.iter().position(|s| s.id == id) else {
            return false;
        };
        let step = self.steps.remove(from);
        let to = position.saturating_sub(1).min(self.steps.len());
        self.steps.insert(to, step);
        renumber_steps(&mut self.steps);
        true
    }

    pub fn normalize_steps(&mut self) {
        normalize_steps(&mut self.steps);
    }

    /// Clamps every ingredient quantity to a finite, non-negative value.
    pub fn clamp_quantities(&mut self) {
        for ingredient in &mut self.ingredients {
            ingredient.clamp_quantity();
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heart = if self.is_favorite { " ♥" } else { "" };
        writeln!(f, "{}{}", self.title, heart)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if let Some(description) = &self.description {
            writeln!(f, "{}\n", description)?;
        }

        writeln!(
            f,
            "Time: {} min (prep: {} min, cook: {} min)",
            self.total_time(),
            self.prep_time,
            self.cook_time
        )?;
        writeln!(f, "Servings: {}", self.servings)?;
        writeln!(f, "Difficulty: {}", self.difficulty)?;

        if !self.tags.is_empty() {
            writeln!(f, "Tags: {}", self.tags.join(", "))?;
        }

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        if !self.steps.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for step in &self.steps {
                writeln!(f, "  {}. {}", step.order, step.instruction)?;
            }
        }

        if let Some(notes) = &self.notes {
            writeln!(f, "\nNotes:\n{}", notes)?;
        }

        Ok(())
    }
}
