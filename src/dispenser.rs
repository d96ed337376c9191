//! Dispensador de la maquina. Chequea y prepara las bebidas.
use log::{debug, info};

use crate::beverage::Beverage;
use crate::ingredient_store::IngredientStore;

/// Result of checking one beverage against the store.
/// `limiting_ingredient` is empty when the beverage was prepared.
/// `ingredient_known` distinguishes an ingredient that lacks quantity from
/// one that is not stocked at all.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    pub prepared: bool,
    pub limiting_ingredient: String,
    pub ingredient_known: bool,
}

/// Raised after a deduction leaves an ingredient below the store threshold.
#[derive(Debug, PartialEq, Eq)]
pub struct LowStockWarning {
    pub ingredient: String,
    pub remaining: i64,
}

/// Checks the full recipe against the store and, only when every line can be
/// satisfied, deducts it in recipe order. A failed check never touches the
/// stock, so checking again with an unchanged store gives the same outcome.
pub fn dispense(
    beverage: &Beverage,
    store: &mut IngredientStore,
) -> (CheckOutcome, Vec<LowStockWarning>) {
    // Every referenced ingredient has to be stocked before quantities matter.
    for line in &beverage.recipe {
        if store.get(&line.ingredient_name).is_none() {
            info!(
                "[DISPENSER] {} needs {}, which is not stocked",
                beverage.name, line.ingredient_name
            );
            let outcome = CheckOutcome {
                prepared: false,
                limiting_ingredient: line.ingredient_name.clone(),
                ingredient_known: false,
            };
            return (outcome, Vec::new());
        }
    }

    // Full scan, no short-circuit: the last line lacking quantity is the one reported.
    let mut possible = true;
    let mut limiting_ingredient = String::new();
    for line in &beverage.recipe {
        if let Some(ingredient) = store.get(&line.ingredient_name) {
            if line.required_quantity > ingredient.remaining {
                limiting_ingredient = line.ingredient_name.clone();
                possible = false;
            }
        }
    }

    if !possible {
        info!(
            "[DISPENSER] Skipped {}, not enough {}",
            beverage.name, limiting_ingredient
        );
        let outcome = CheckOutcome {
            prepared: false,
            limiting_ingredient,
            ingredient_known: true,
        };
        return (outcome, Vec::new());
    }

    let mut warnings = Vec::new();
    for line in &beverage.recipe {
        store.consume(&line.ingredient_name, line.required_quantity);
        debug!(
            "[DISPENSER] Uses {} of {} for {}",
            line.required_quantity, line.ingredient_name, beverage.name
        );
        if store.is_low(&line.ingredient_name) {
            if let Some(ingredient) = store.get(&line.ingredient_name) {
                warnings.push(LowStockWarning {
                    ingredient: ingredient.name.clone(),
                    remaining: ingredient.remaining,
                });
            }
        }
    }
    let outcome = CheckOutcome {
        prepared: true,
        limiting_ingredient: String::new(),
        ingredient_known: true,
    };
    (outcome, warnings)
}
