use crate::domain::ledger::LedgerEntry;
use crate::domain::ports::LedgerStore;
use crate::domain::transaction::TransactionRequest;
use crate::domain::verdict::Verdict;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory ledger.
///
/// A single `RwLock` around the entry sequence serializes appends, and readers always
/// see a complete prefix of what was appended. Contents live as long as the process.
#[derive(Default, Clone)]
pub struct InMemoryLedger {
    entries: Arc<RwLock<Vec<LedgerEntry>>>,
}

impl InMemoryLedger {
    /// Creates a new, empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn append(&self, request: TransactionRequest, verdict: Verdict) -> Result<LedgerEntry> {
        let entry = LedgerEntry::new(request, verdict);
        let mut entries = self.entries.write().await;
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> Result<Vec<LedgerEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.clone())
    }
}
