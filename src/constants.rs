//! Parametros de configuracion de la maquina expendedora

/// Quantity below which an ingredient is reported as running low.
/// The store receives it at load time, so it can be varied per deployment.
pub const LOW_STOCK_THRESHOLD: i64 = 30;

/// Quantity an ingredient is restored to by a refill.
/// Applied uniformly to every ingredient read from the machine file.
pub const REFILL_CEILING: i64 = 1000;

/// Machine file to read when no path is given on the command line
pub const DEFAULT_MACHINE_FILE: &str = "machine.json";
