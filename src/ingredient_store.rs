//! Stock de ingredientes de la maquina
use std::collections::HashMap;

use crate::ingredient::Ingredient;

/// Holds every stocked ingredient by name (the name is the unique key).
/// The low stock threshold is injected at construction.
pub struct IngredientStore {
    ingredients: HashMap<String, Ingredient>,
    low_stock_threshold: i64,
}

impl IngredientStore {
    pub fn new(low_stock_threshold: i64) -> IngredientStore {
        IngredientStore {
            ingredients: HashMap::new(),
            low_stock_threshold,
        }
    }

    /// Inserts the ingredient under its name, overwriting any previous record.
    pub fn put(&mut self, ingredient: Ingredient) {
        self.ingredients.insert(ingredient.name.clone(), ingredient);
    }

    pub fn get(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }

    /// Deducts `amount` from the named ingredient. Does nothing if the name
    /// is not stocked, callers are expected to check with `get` first.
    pub fn consume(&mut self, name: &str, amount: i64) {
        if let Some(ingredient) = self.ingredients.get_mut(name) {
            ingredient.consume(amount);
        }
    }

    /// True when the named ingredient is below the low stock threshold.
    pub fn is_low(&self, name: &str) -> bool {
        match self.ingredients.get(name) {
            Some(ingredient) => ingredient.is_below(self.low_stock_threshold),
            None => false,
        }
    }

    pub fn refill(&mut self, name: &str) {
        if let Some(ingredient) = self.ingredients.get_mut(name) {
            ingredient.refill();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ingredient> {
        self.ingredients.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(name: &str, quantity: i64) -> IngredientStore {
        let mut store = IngredientStore::new(30);
        store.put(Ingredient::new(String::from(name), quantity, 1000));
        store
    }

    #[test]
    fn should_find_a_stocked_ingredient_by_exact_name() {
        let store = store_with("tea", 500);
        assert_eq!(true, store.get("tea").is_some());
        assert_eq!(true, store.get("Tea").is_none());
    }

    #[test]
    fn should_overwrite_the_record_when_putting_the_same_name() {
        let mut store = store_with("tea", 500);
        store.put(Ingredient::new(String::from("tea"), 42, 1000));
        let record = store.get("tea").unwrap();
        assert_eq!(42, record.remaining);
    }

    #[test]
    fn should_consume_from_a_stocked_ingredient() {
        let mut store = store_with("coffee", 400);
        store.consume("coffee", 230);
        assert_eq!(170, store.get("coffee").unwrap().remaining);
    }

    #[test]
    fn should_ignore_consumption_of_an_unknown_name() {
        let mut store = store_with("coffee", 400);
        store.consume("water", 50);
        assert_eq!(true, store.get("water").is_none());
        assert_eq!(400, store.get("coffee").unwrap().remaining);
    }

    #[test]
    fn should_report_low_stock_only_below_the_threshold() {
        let mut store = store_with("milk", 30);
        assert_eq!(false, store.is_low("milk"));
        store.consume("milk", 1);
        assert_eq!(true, store.is_low("milk"));
        assert_eq!(false, store.is_low("water"));
    }

    #[test]
    fn should_refill_an_ingredient_to_its_ceiling() {
        let mut store = store_with("milk", 5);
        store.refill("milk");
        assert_eq!(1000, store.get("milk").unwrap().remaining);
    }
}
