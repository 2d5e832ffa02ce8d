//! Identifier generation for recipes, steps, ingredients and grocery items.

use uuid::Uuid;

/// Returns a fresh random identifier.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Returns an identifier for which `taken` is false, drawing again on a
/// collision.
pub fn unique_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let id = new_id();
        if !taken(&id) {
            return id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_new_id_is_uuid() {
        let id = new_id();
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_unique_id_retries_taken() {
        let calls = Cell::new(0);
        let id = unique_id(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert!(!id.is_empty());
    }
}
