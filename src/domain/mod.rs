//! Domain model: entities, the registry, requests, verdicts and the ledger port.
//!
//! Everything here except the ledger port is synchronous and free of I/O once loaded.

pub mod entity;
pub mod evaluator;
pub mod ledger;
pub mod ports;
pub mod registry;
pub mod transaction;
pub mod verdict;
