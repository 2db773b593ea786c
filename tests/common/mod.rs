#![allow(dead_code)]

use compliance_ledger::application::engine::ComplianceEngine;
use compliance_ledger::domain::entity::Entity;
use compliance_ledger::domain::evaluator::ComplianceEvaluator;
use compliance_ledger::domain::registry::EntityRegistry;
use compliance_ledger::domain::transaction::TransactionRequest;
use compliance_ledger::infrastructure::in_memory::InMemoryLedger;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// e1: authorized, restricted to health and accidents.
/// e2: authorized, unrestricted.
/// e3: not authorized.
pub fn registry() -> Arc<EntityRegistry> {
    let registry = EntityRegistry::load(vec![
        Entity::new("e1", "cooperative", true).with_scopes(["health", "accidents"]),
        Entity::new("e2", "stock-company", true),
        Entity::new("e3", "association", false).with_scopes(["health"]),
    ])
    .expect("registry fixture is valid");
    Arc::new(registry)
}

pub fn evaluator() -> ComplianceEvaluator {
    ComplianceEvaluator::new(registry())
}

pub fn engine() -> ComplianceEngine {
    ComplianceEngine::new(evaluator(), Box::new(InMemoryLedger::new()))
}

pub fn request(entity_id: &str, amount: Decimal, scope: &str) -> TransactionRequest {
    TransactionRequest::new(entity_id, "Sender1", "Receiver1", amount, scope)
}

pub fn random_id(rng: &mut impl Rng) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect()
}

/// Non-negative amount with two decimal places, up to 1000.00.
pub fn random_amount(rng: &mut impl Rng) -> Decimal {
    Decimal::new(rng.gen_range(0..=100_000), 2)
}

pub fn random_scope(rng: &mut impl Rng) -> String {
    const SCOPES: [&str; 5] = ["health", "accidents", "agricultural", "auto", "life"];
    SCOPES[rng.gen_range(0..SCOPES.len())].to_string()
}

/// Writes a requests CSV with the standard header to a temporary file.
pub fn requests_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "entityId, sender, receiver, amount, scope").unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}
