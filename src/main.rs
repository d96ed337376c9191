pub mod beverage;
pub mod constants;
pub mod dispenser;
pub mod errors;
pub mod ingredient;
pub mod ingredient_store;
pub mod machine;
pub mod machine_loader;
pub mod output;
pub mod recipe_catalog;
pub mod statistics;

use std::env;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use constants::DEFAULT_MACHINE_FILE;
use machine_loader::load_machine;
use output::ConsoleSink;

fn main() {
    if SimpleLogger::new().with_level(LevelFilter::Info).init().is_err() {
        println!("Error initializing the logger");
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from(DEFAULT_MACHINE_FILE));

    match load_machine(&path) {
        Ok(mut machine) => {
            let mut sink = ConsoleSink;
            machine.process_beverages(&mut sink);
            machine.print_statistics();
        }
        Err(e) => error!("[MACHINE] Could not load {}: {:?}", path, e),
    }
}
