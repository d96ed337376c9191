//! Representacion del catalogo de bebidas
use crate::beverage::Beverage;

/// Ordered collection of the beverages to prepare. Insertion order is the
/// processing order and the order of the rendered output lines. Two
/// beverages may share a name; both are kept and processed independently.
pub struct RecipeCatalog {
    beverages: Vec<Beverage>,
}

impl RecipeCatalog {
    pub fn new() -> RecipeCatalog {
        RecipeCatalog {
            beverages: Vec::new(),
        }
    }

    pub fn add(&mut self, beverage: Beverage) {
        self.beverages.push(beverage);
    }

    /// Restartable traversal in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Beverage> {
        self.beverages.iter()
    }

    pub fn len(&self) -> usize {
        self.beverages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beverages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_an_empty_catalog() {
        let catalog = RecipeCatalog::new();
        assert_eq!(true, catalog.is_empty());
        assert_eq!(0, catalog.len());
    }

    #[test]
    fn should_add_a_beverage_to_the_catalog() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(Beverage::new(String::from("popat")));
        assert_eq!(false, catalog.is_empty());
        assert_eq!(1, catalog.len());
    }

    #[test]
    fn should_traverse_beverages_in_insertion_order() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(Beverage::new(String::from("popat")));
        catalog.add(Beverage::new(String::from("topap")));
        let names: Vec<&str> = catalog.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(vec!["popat", "topap"], names);
    }

    #[test]
    fn should_keep_beverages_with_the_same_name() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(Beverage::new(String::from("popat")));
        catalog.add(Beverage::new(String::from("popat")));
        assert_eq!(2, catalog.len());
    }

    #[test]
    fn should_restart_the_traversal_from_the_beginning() {
        let mut catalog = RecipeCatalog::new();
        catalog.add(Beverage::new(String::from("popat")));
        assert_eq!(1, catalog.iter().count());
        assert_eq!(1, catalog.iter().count());
    }
}
