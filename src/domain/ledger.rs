use super::transaction::TransactionRequest;
use super::verdict::{ComplianceStatus, Verdict};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Serialize, Serializer};

/// A processed transaction together with the verdict attached to it.
///
/// Entries are stored by value and handed out as clones, so a stored entry cannot be
/// changed by anyone holding a copy.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LedgerEntry {
    pub request: TransactionRequest,
    pub verdict: Verdict,
}

impl LedgerEntry {
    pub fn new(request: TransactionRequest, verdict: Verdict) -> Self {
        Self { request, verdict }
    }

    pub fn to_record(&self) -> LedgerRecord {
        LedgerRecord::from(self)
    }
}

/// Flat external shape of a ledger entry: the request fields merged with the
/// compliance status and, for rejections, the reason code.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LedgerRecord {
    pub entity_id: String,
    pub sender: String,
    pub receiver: String,
    #[serde(serialize_with = "serialize_amount")]
    pub amount: Decimal,
    pub scope: String,
    pub compliance_status: ComplianceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_reason: Option<String>,
}

/// Writes the amount as a JSON number: an integer when it has no fractional part.
fn serialize_amount<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if amount.fract().is_zero()
        && let Some(whole) = amount.to_i64()
    {
        return serializer.serialize_i64(whole);
    }
    match amount.to_f64() {
        Some(value) => serializer.serialize_f64(value),
        None => serializer.collect_str(amount),
    }
}

impl From<&LedgerEntry> for LedgerRecord {
    fn from(entry: &LedgerEntry) -> Self {
        let request = &entry.request;
        Self {
            entity_id: request.entity_id.clone(),
            sender: request.sender.clone(),
            receiver: request.receiver.clone(),
            amount: request.amount,
            scope: request.scope.clone(),
            compliance_status: entry.verdict.status(),
            compliance_reason: entry.verdict.reason().map(|reason| reason.to_string()),
        }
    }
}
