//! Sample recipes used when no recipes have been stored yet.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Difficulty, Ingredient, Recipe, RecipeStep};

fn seed_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn ingredients(items: &[(&str, f64, &str)]) -> Vec<Ingredient> {
    items
        .iter()
        .enumerate()
        .map(|(i, (name, quantity, unit))| {
            Ingredient::with_id((i + 1).to_string(), *name, *quantity, *unit)
        })
        .collect()
}

fn steps(instructions: &[&str]) -> Vec<RecipeStep> {
    instructions
        .iter()
        .enumerate()
        .map(|(i, text)| RecipeStep::new((i + 1).to_string(), i as u32 + 1, *text))
        .collect()
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|t| t.to_string()).collect()
}

/// The three sample recipes, in stored (newest-first) order.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: "1".into(),
            title: "Classic Spaghetti Carbonara".into(),
            description: Some("A creamy Italian pasta dish with eggs, cheese, and pancetta".into()),
            image: Some("https://images.unsplash.com/photo-1612874742237-6526221588e3?w=800".into()),
            ingredients: ingredients(&[
                ("Spaghetti", 400.0, "g"),
                ("Pancetta", 200.0, "g"),
                ("Eggs", 4.0, "piece"),
                ("Parmesan cheese", 100.0, "g"),
                ("Black pepper", 1.0, "tsp"),
            ]),
            steps: steps(&[
                "Bring a large pot of salted water to boil and cook spaghetti according to package directions.",
                "While pasta cooks, cut pancetta into small cubes and fry until crispy.",
                "Whisk eggs with grated Parmesan and black pepper in a bowl.",
                "Drain pasta, reserving 1 cup of pasta water. Immediately toss with pancetta.",
                "Remove from heat and quickly stir in egg mixture, adding pasta water as needed.",
            ]),
            tags: tags(&["Dinner", "Italian", "Comfort Food"]),
            prep_time: 10,
            cook_time: 20,
            servings: 4,
            difficulty: Difficulty::Medium,
            notes: None,
            is_favorite: true,
            created_at: seed_date(2024, 1, 15),
            updated_at: seed_date(2024, 1, 15),
        },
        Recipe {
            id: "2".into(),
            title: "Avocado Toast with Poached Eggs".into(),
            description: Some("A simple yet delicious breakfast that never disappoints".into()),
            image: Some("https://images.unsplash.com/photo-1525351484163-7529414344d8?w=800".into()),
            ingredients: ingredients(&[
                ("Sourdough bread", 2.0, "slice"),
                ("Ripe avocado", 1.0, "piece"),
                ("Eggs", 2.0, "piece"),
                ("Cherry tomatoes", 6.0, "piece"),
                ("Red pepper flakes", 1.0, "pinch"),
            ]),
            steps: steps(&[
                "Toast the sourdough bread until golden and crispy.",
                "Mash avocado with a fork, season with salt and pepper.",
                "Poach eggs in simmering water with a splash of vinegar for 3-4 minutes.",
                "Spread mashed avocado on toast, top with poached eggs.",
                "Garnish with halved cherry tomatoes and red pepper flakes.",
            ]),
            tags: tags(&["Breakfast", "Healthy", "Quick Meal", "Vegetarian"]),
            prep_time: 5,
            cook_time: 10,
            servings: 1,
            difficulty: Difficulty::Easy,
            notes: None,
            is_favorite: false,
            created_at: seed_date(2024, 1, 20),
            updated_at: seed_date(2024, 1, 20),
        },
        Recipe {
            id: "3".into(),
            title: "Thai Green Curry".into(),
            description: Some("Aromatic and spicy Thai curry with vegetables and coconut milk".into()),
            image: Some("https://images.unsplash.com/photo-1455619452474-d2be8b1e70cd?w=800".into()),
            ingredients: ingredients(&[
                ("Chicken breast", 500.0, "g"),
                ("Coconut milk", 400.0, "ml"),
                ("Green curry paste", 3.0, "tbsp"),
                ("Thai basil", 1.0, "cup"),
                ("Bell peppers", 2.0, "piece"),
            ]),
            steps: steps(&[
                "Cut chicken into bite-sized pieces and slice bell peppers.",
                "Heat oil in a wok, fry curry paste until fragrant.",
                "Add coconut milk and bring to a simmer.",
                "Add chicken and vegetables, cook for 15 minutes.",
                "Stir in Thai basil and serve over jasmine rice.",
            ]),
            tags: tags(&["Dinner", "Asian", "Gluten-Free"]),
            prep_time: 15,
            cook_time: 25,
            servings: 4,
            difficulty: Difficulty::Medium,
            notes: None,
            is_favorite: true,
            created_at: seed_date(2024, 2, 1),
            updated_at: seed_date(2024, 2, 1),
        },
    ]
}
