use crate::ingredient_store::IngredientStore;

/// Counters of the batch outcomes.
pub struct MachineStatistics {
    pub prepared: u64,
    pub rejected: u64,
}

impl MachineStatistics {
    pub fn new() -> MachineStatistics {
        MachineStatistics {
            prepared: 0,
            rejected: 0,
        }
    }

    pub fn record(&mut self, prepared: bool) {
        if prepared {
            self.prepared += 1;
        } else {
            self.rejected += 1;
        }
    }
}

pub fn print_statistics(statistics: &MachineStatistics, store: &IngredientStore) {
    let mut line = format!(
        "[STATISTICS] Beverages prepared={} rejected={} | Ingredient=(remaining, consumed) |",
        statistics.prepared, statistics.rejected
    );
    add_ingredients_to_statistics_string(&mut line, store);
    println!("{}", line);
}

fn add_ingredients_to_statistics_string(statistics: &mut String, store: &IngredientStore) {
    for ingredient in store.iter() {
        statistics.push_str(&format!(
            " {}=({},{}) ",
            ingredient.name, ingredient.remaining, ingredient.consumed
        ));
    }
}
