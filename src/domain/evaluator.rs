use super::registry::EntityRegistry;
use super::transaction::TransactionRequest;
use super::verdict::{ReasonCode, Verdict};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

/// Amount above which a transaction needs supervision.
pub const DEFAULT_AMOUNT_LIMIT: Decimal = dec!(5);

/// Decides whether a transaction may be accepted.
///
/// Evaluation is synchronous and has no side effects: the same request against the same
/// registry always yields the same verdict. Recording the outcome is left to the caller.
#[derive(Debug, Clone)]
pub struct ComplianceEvaluator {
    registry: Arc<EntityRegistry>,
    amount_limit: Decimal,
}

impl ComplianceEvaluator {
    pub fn new(registry: Arc<EntityRegistry>) -> Self {
        Self {
            registry,
            amount_limit: DEFAULT_AMOUNT_LIMIT,
        }
    }

    pub fn with_amount_limit(mut self, amount_limit: Decimal) -> Self {
        self.amount_limit = amount_limit;
        self
    }

    pub fn amount_limit(&self) -> Decimal {
        self.amount_limit
    }

    /// Applies the rules in order; the first failing rule decides the reason.
    ///
    /// 1. entity exists, is authorized, and may operate in the requested scope
    /// 2. amount is not negative
    /// 3. amount does not exceed the limit
    pub fn evaluate(&self, request: &TransactionRequest) -> Verdict {
        let authorization = self
            .registry
            .authorization_for(&request.entity_id, &request.scope);
        if let Some(reason) = ReasonCode::from_authorization(authorization) {
            return Verdict::NonCompliant(reason);
        }

        if request.amount < Decimal::ZERO {
            return Verdict::NonCompliant(ReasonCode::AmountInvalid);
        }

        if request.amount > self.amount_limit {
            return Verdict::NonCompliant(ReasonCode::AmountLimitExceeded);
        }

        Verdict::Compliant
    }
}
