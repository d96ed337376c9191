//! Maquina expendedora. Procesa el catalogo de bebidas.
use log::info;

use crate::dispenser::{dispense, CheckOutcome, LowStockWarning};
use crate::ingredient_store::IngredientStore;
use crate::output::OutputSink;
use crate::recipe_catalog::RecipeCatalog;
use crate::statistics::{print_statistics, MachineStatistics};

/// Owns the catalog and the ingredient store, and prepares every beverage of
/// the catalog in order against the shared store. Beverages are processed
/// strictly one after the other: what one consumes is seen by the next check.
pub struct VendingMachine {
    catalog: RecipeCatalog,
    store: IngredientStore,
    statistics: MachineStatistics,
}

impl VendingMachine {
    pub fn new(catalog: RecipeCatalog, store: IngredientStore) -> VendingMachine {
        VendingMachine {
            catalog,
            store,
            statistics: MachineStatistics::new(),
        }
    }

    /// Dispenses each beverage of the catalog and writes its warning lines
    /// followed by exactly one outcome line to the sink.
    pub fn process_beverages(&mut self, sink: &mut dyn OutputSink) {
        for beverage in self.catalog.iter() {
            let (outcome, warnings) = dispense(beverage, &mut self.store);
            for warning in &warnings {
                sink.write_line(&render_warning(warning));
            }
            sink.write_line(&render_outcome(&beverage.name, &outcome));
            self.statistics.record(outcome.prepared);
        }
        info!("[MACHINE] Processed {} beverages", self.catalog.len());
    }

    pub fn print_statistics(&self) {
        print_statistics(&self.statistics, &self.store);
    }

    pub fn statistics(&self) -> &MachineStatistics {
        &self.statistics
    }
}

fn render_outcome(beverage_name: &str, outcome: &CheckOutcome) -> String {
    if outcome.prepared {
        format!("Beverage: {} is prepared", beverage_name)
    } else if outcome.ingredient_known {
        format!(
            "Beverage: {} cannot be prepared because {} is not sufficient.",
            beverage_name, outcome.limiting_ingredient
        )
    } else {
        format!(
            "Beverage: {} cannot be prepared because {} is not available.",
            beverage_name, outcome.limiting_ingredient
        )
    }
}

fn render_warning(warning: &LowStockWarning) -> String {
    format!(
        "******* Ingredient {} is running low: {} ************",
        warning.ingredient, warning.remaining
    )
}
