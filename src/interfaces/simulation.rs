use crate::application::engine::ComplianceEngine;
use crate::domain::ledger::LedgerEntry;
use crate::domain::transaction::TransactionRequest;
use crate::error::Result;
use rust_decimal_macros::dec;
use std::time::Duration;
use tracing::info;

/// The demo batch: one compliant transfer and three rejections.
pub fn reference_transactions() -> Vec<TransactionRequest> {
    vec![
        TransactionRequest::new("entity_001", "Sender1", "Receiver1", dec!(3), "health"),
        TransactionRequest::new("entity_002", "Sender2", "Receiver2", dec!(6), "accidents"),
        TransactionRequest::new("entity_003", "Sender3", "Receiver3", dec!(2), "agricultural"),
        TransactionRequest::new("entity_001", "Sender4", "Receiver4", dec!(10), "health"),
    ]
}

/// Feeds `requests` through the simulation path, pausing `delay` before each one to mimic
/// analysis latency. Every request is recorded, compliant or not.
pub async fn run(
    engine: &ComplianceEngine,
    requests: Vec<TransactionRequest>,
    delay: Duration,
) -> Result<Vec<LedgerEntry>> {
    info!(count = requests.len(), "starting transaction simulation");
    let mut recorded = Vec::with_capacity(requests.len());
    for request in requests {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let entry = engine.simulate_transaction(request).await?;
        match entry.verdict.reason() {
            None => info!(
                entity = %entry.request.entity_id,
                sender = %entry.request.sender,
                receiver = %entry.request.receiver,
                amount = %entry.request.amount,
                scope = %entry.request.scope,
                "simulated transaction compliant"
            ),
            Some(reason) => info!(
                entity = %entry.request.entity_id,
                sender = %entry.request.sender,
                receiver = %entry.request.receiver,
                amount = %entry.request.amount,
                scope = %entry.request.scope,
                %reason,
                "simulated transaction non-compliant"
            ),
        }
        recorded.push(entry);
    }
    info!("transaction simulation finished");
    Ok(recorded)
}
