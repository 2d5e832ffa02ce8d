use serde::{Deserialize, Serialize};
use std::fmt;

use crate::id::new_id;

/// Units offered by the recipe editor. Free-form units are still accepted.
pub const UNIT_OPTIONS: [&str; 16] = [
    "tsp", "tbsp", "cup", "oz", "lb", "g", "kg", "ml", "L", "pinch", "dash", "piece", "slice",
    "clove", "can", "package",
];

/// Clamps a quantity to a finite, non-negative value. Non-finite values
/// become 0 because JSON cannot represent them.
pub(crate) fn clamp_quantity(quantity: f64) -> f64 {
    if quantity.is_finite() {
        quantity.max(0.0)
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ingredient {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, quantity, unit)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity: clamp_quantity(quantity),
            unit: unit.into(),
        }
    }

    /// Re-applies the quantity clamp after the field was set directly.
    pub fn clamp_quantity(&mut self) {
        self.quantity = clamp_quantity(self.quantity);
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.is_empty() {
            write!(f, "{} {}", self.quantity, self.name)
        } else {
            write!(f, "{} {} {}", self.quantity, self.unit, self.name)
        }
    }
}
