//! Transport shells around the engine: CSV files, HTTP and the simulation driver.

pub mod csv;
pub mod http;
pub mod simulation;
