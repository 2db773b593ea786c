use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A transaction submitted for compliance evaluation.
///
/// `sender` and `receiver` are opaque and never checked for existence. `entity_id` is a
/// lookup key into the [`EntityRegistry`](super::registry::EntityRegistry).
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub entity_id: String,
    pub sender: String,
    pub receiver: String,
    pub amount: Decimal,
    pub scope: String,
}

impl TransactionRequest {
    pub fn new(
        entity_id: impl Into<String>,
        sender: impl Into<String>,
        receiver: impl Into<String>,
        amount: Decimal,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            sender: sender.into(),
            receiver: receiver.into(),
            amount,
            scope: scope.into(),
        }
    }
}
