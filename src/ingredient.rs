/// Stock record of a single ingredient. `remaining` can go below zero if
/// `consume` is called without a prior sufficiency check; the dispenser
/// always checks the whole recipe first.
pub struct Ingredient {
    pub name: String,
    pub remaining: i64,
    pub consumed: i64,
    pub refill_ceiling: i64,
}

impl Ingredient {
    pub fn new(name: String, initial_quantity: i64, refill_ceiling: i64) -> Ingredient {
        Ingredient {
            name,
            remaining: initial_quantity,
            consumed: 0,
            refill_ceiling,
        }
    }

    pub fn consume(&mut self, amount: i64) {
        self.remaining -= amount;
        self.consumed += amount;
    }

    /// Restores the ingredient to its refill ceiling.
    pub fn refill(&mut self) {
        self.remaining = self.refill_ceiling;
    }

    pub fn is_below(&self, threshold: i64) -> bool {
        self.remaining < threshold
    }
}
