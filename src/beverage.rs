/// One (ingredient, required quantity) pair of a recipe.
#[derive(Debug)]
pub struct RecipeLine {
    pub ingredient_name: String,
    pub required_quantity: i64,
}

/// A beverage and its recipe. Recipe order is the insertion order from the
/// machine file; deductions and diagnostics follow it.
#[derive(Debug)]
pub struct Beverage {
    pub name: String,
    pub recipe: Vec<RecipeLine>,
}

impl Beverage {
    pub fn new(name: String) -> Beverage {
        Beverage {
            name,
            recipe: Vec::new(),
        }
    }

    pub fn add_ingredient(&mut self, ingredient_name: String, required_quantity: i64) {
        self.recipe.push(RecipeLine {
            ingredient_name,
            required_quantity,
        });
    }
}
