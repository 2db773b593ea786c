use super::ledger::LedgerEntry;
use super::transaction::TransactionRequest;
use super::verdict::Verdict;
use crate::error::Result;
use async_trait::async_trait;

/// Append-only storage for processed transactions.
///
/// Implementations must linearize appends and return listings in insertion order.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn append(&self, request: TransactionRequest, verdict: Verdict) -> Result<LedgerEntry>;
    async fn list_all(&self) -> Result<Vec<LedgerEntry>>;
}

pub type LedgerStoreBox = Box<dyn LedgerStore>;
