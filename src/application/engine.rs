use crate::domain::evaluator::ComplianceEvaluator;
use crate::domain::ledger::LedgerEntry;
use crate::domain::ports::LedgerStoreBox;
use crate::domain::transaction::TransactionRequest;
use crate::domain::verdict::{ReasonCode, Verdict};
use crate::error::Result;
use tracing::{debug, info};

/// Result of the primary processing path.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Outcome {
    /// The transaction passed every rule and was recorded.
    Accepted(LedgerEntry),
    /// The transaction was rejected and not recorded.
    Rejected(ReasonCode),
}

/// Entry point for compliance processing.
///
/// `ComplianceEngine` owns the evaluator and the ledger backend. Deciding and recording
/// are kept apart: the evaluator only decides, and each entry path chooses what to record.
pub struct ComplianceEngine {
    evaluator: ComplianceEvaluator,
    ledger: LedgerStoreBox,
}

impl ComplianceEngine {
    /// Creates a new `ComplianceEngine`.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - The decision function, bound to a registry snapshot.
    /// * `ledger` - The store that receives recorded transactions.
    pub fn new(evaluator: ComplianceEvaluator, ledger: LedgerStoreBox) -> Self {
        Self { evaluator, ledger }
    }

    /// Evaluates a request without recording anything.
    pub fn evaluate(&self, request: &TransactionRequest) -> Verdict {
        self.evaluator.evaluate(request)
    }

    /// Primary path: records the transaction only if it is compliant.
    pub async fn process_transaction(&self, request: TransactionRequest) -> Result<Outcome> {
        match self.evaluator.evaluate(&request) {
            Verdict::Compliant => {
                let entry = self.ledger.append(request, Verdict::Compliant).await?;
                debug!(entity = %entry.request.entity_id, "transaction accepted");
                Ok(Outcome::Accepted(entry))
            }
            Verdict::NonCompliant(reason) => {
                info!(
                    entity = %request.entity_id,
                    scope = %request.scope,
                    %reason,
                    "transaction rejected"
                );
                Ok(Outcome::Rejected(reason))
            }
        }
    }

    /// Simulation path: records every transaction together with its verdict.
    pub async fn simulate_transaction(&self, request: TransactionRequest) -> Result<LedgerEntry> {
        let verdict = self.evaluator.evaluate(&request);
        self.ledger.append(request, verdict).await
    }

    /// All recorded transactions in the order they were recorded.
    pub async fn transactions(&self) -> Result<Vec<LedgerEntry>> {
        self.ledger.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry::EntityRegistry;
    use crate::infrastructure::in_memory::InMemoryLedger;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn engine() -> ComplianceEngine {
        let evaluator = ComplianceEvaluator::new(Arc::new(EntityRegistry::reference()));
        ComplianceEngine::new(evaluator, Box::new(InMemoryLedger::new()))
    }

    #[tokio::test]
    async fn test_process_records_only_accepted() {
        let engine = engine();

        let accepted = TransactionRequest::new("entity_001", "S1", "R1", dec!(3), "health");
        let rejected = TransactionRequest::new("entity_001", "S4", "R4", dec!(10), "health");

        let outcome = engine.process_transaction(accepted.clone()).await.unwrap();
        assert_eq!(
            outcome,
            Outcome::Accepted(LedgerEntry::new(accepted, Verdict::Compliant))
        );

        let outcome = engine.process_transaction(rejected).await.unwrap();
        assert_eq!(outcome, Outcome::Rejected(ReasonCode::AmountLimitExceeded));

        let recorded = engine.transactions().await.unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].request.sender, "S1");
    }

    #[tokio::test]
    async fn test_simulate_records_everything() {
        let engine = engine();

        let entry = engine
            .simulate_transaction(TransactionRequest::new(
                "entity_003",
                "S3",
                "R3",
                dec!(2),
                "agricultural",
            ))
            .await
            .unwrap();
        assert_eq!(
            entry.verdict,
            Verdict::NonCompliant(ReasonCode::EntityNotAuthorized)
        );

        let recorded = engine.transactions().await.unwrap();
        assert_eq!(recorded, vec![entry]);
    }

    #[tokio::test]
    async fn test_evaluate_does_not_record() {
        let engine = engine();
        let request = TransactionRequest::new("entity_002", "S", "R", dec!(1), "accidents");

        assert!(engine.evaluate(&request).is_compliant());
        assert!(engine.transactions().await.unwrap().is_empty());
    }
}
