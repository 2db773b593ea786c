use crate::domain::ledger::LedgerEntry;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 7] = [
    "entityId",
    "sender",
    "receiver",
    "amount",
    "scope",
    "complianceStatus",
    "complianceReason",
];

/// Writes ledger entries as CSV. The reason column is empty for compliant entries.
pub struct LedgerWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> LedgerWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_entries(&mut self, entries: impl IntoIterator<Item = LedgerEntry>) -> Result<()> {
        self.writer.write_record(HEADER)?;
        for entry in entries {
            let record = entry.to_record();
            let amount = record.amount.normalize().to_string();
            self.writer.write_record([
                record.entity_id.as_str(),
                record.sender.as_str(),
                record.receiver.as_str(),
                amount.as_str(),
                record.scope.as_str(),
                record.compliance_status.as_str(),
                record.compliance_reason.as_deref().unwrap_or(""),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::TransactionRequest;
    use crate::domain::verdict::{ReasonCode, Verdict};
    use rust_decimal_macros::dec;

    #[test]
    fn test_writer_output() {
        let entries = vec![
            LedgerEntry::new(
                TransactionRequest::new("entity_001", "Sender1", "Receiver1", dec!(3.0), "health"),
                Verdict::Compliant,
            ),
            LedgerEntry::new(
                TransactionRequest::new("entity_001", "Sender4", "Receiver4", dec!(10), "health"),
                Verdict::NonCompliant(ReasonCode::AmountLimitExceeded),
            ),
        ];

        let mut buffer = Vec::new();
        LedgerWriter::new(&mut buffer).write_entries(entries).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "entityId,sender,receiver,amount,scope,complianceStatus,complianceReason",
                "entity_001,Sender1,Receiver1,3,health,Compliant,",
                "entity_001,Sender4,Receiver4,10,health,Non-Compliant,AMOUNT_LIMIT_EXCEEDED",
            ]
        );
    }

    #[test]
    fn test_writer_empty_ledger_writes_header_only() {
        let mut buffer = Vec::new();
        LedgerWriter::new(&mut buffer)
            .write_entries(Vec::new())
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().lines().count(), 1);
    }
}
