use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::beverage::Beverage;
use crate::constants::{LOW_STOCK_THRESHOLD, REFILL_CEILING};
use crate::errors::VendingMachineError;
use crate::ingredient::Ingredient;
use crate::ingredient_store::IngredientStore;
use crate::machine::VendingMachine;
use crate::recipe_catalog::RecipeCatalog;

// The maps keep the file order of their keys, which becomes the catalog
// order and the recipe order.
#[derive(Deserialize)]
struct MachineConfiguration {
    machine: MachineSection,
}

#[derive(Deserialize)]
struct MachineSection {
    beverages: Map<String, Value>,
    total_items_quantity: Map<String, Value>,
}

fn read_configuration_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<MachineConfiguration, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let configuration: MachineConfiguration = serde_json::from_reader(reader)?;
    Ok(configuration)
}

fn parse_quantity(value: &Value) -> Result<i64, VendingMachineError> {
    value
        .as_u64()
        .and_then(|quantity| i64::try_from(quantity).ok())
        .ok_or(VendingMachineError::InvalidQuantity)
}

fn build_catalog(beverages: &Map<String, Value>) -> Result<RecipeCatalog, VendingMachineError> {
    let mut catalog = RecipeCatalog::new();
    for (name, recipe) in beverages {
        let recipe = recipe
            .as_object()
            .ok_or(VendingMachineError::MalformedConfiguration)?;
        let mut beverage = Beverage::new(name.clone());
        for (ingredient_name, quantity) in recipe {
            beverage.add_ingredient(ingredient_name.clone(), parse_quantity(quantity)?);
        }
        debug!("[LOADER] Added beverage {}", name);
        catalog.add(beverage);
    }
    Ok(catalog)
}

fn build_store(
    quantities: &Map<String, Value>,
    low_stock_threshold: i64,
    refill_ceiling: i64,
) -> Result<IngredientStore, VendingMachineError> {
    let mut store = IngredientStore::new(low_stock_threshold);
    for (name, quantity) in quantities {
        store.put(Ingredient::new(
            name.clone(),
            parse_quantity(quantity)?,
            refill_ceiling,
        ));
    }
    Ok(store)
}

fn build_machine(
    configuration: MachineConfiguration,
) -> Result<VendingMachine, VendingMachineError> {
    let catalog = build_catalog(&configuration.machine.beverages)?;
    let store = build_store(
        &configuration.machine.total_items_quantity,
        LOW_STOCK_THRESHOLD,
        REFILL_CEILING,
    )?;
    info!(
        "[LOADER] Loaded {} beverages and {} ingredients",
        catalog.len(),
        configuration.machine.total_items_quantity.len()
    );
    Ok(VendingMachine::new(catalog, store))
}

/// Reads the machine file and builds the machine from it. Nothing is
/// returned on failure, so a malformed file cannot leave the machine
/// partially loaded.
pub fn load_machine<P: AsRef<Path>>(path: P) -> Result<VendingMachine, VendingMachineError> {
    let result = read_configuration_from_file(path);
    match result {
        Ok(configuration) => build_machine(configuration),
        Err(_) => Err(VendingMachineError::FileReaderError),
    }
}
