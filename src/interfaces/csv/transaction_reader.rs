use crate::domain::transaction::TransactionRequest;
use crate::error::{ComplianceError, Result};
use std::io::Read;

/// Columns a request file must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 5] = ["entityId", "sender", "receiver", "amount", "scope"];

/// Reads transaction requests from a CSV source.
///
/// The header is checked up front so a file with the wrong layout fails as a whole
/// instead of producing one error per row. After that, a bad row only affects itself.
pub struct TransactionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> TransactionReader<R> {
    /// Wraps `source` and validates its header against [`REQUIRED_COLUMNS`].
    pub fn new(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);

        let headers = reader.headers()?;
        if let Some(missing) = REQUIRED_COLUMNS
            .into_iter()
            .find(|column| !headers.iter().any(|header| header == *column))
        {
            return Err(ComplianceError::MissingColumn(missing));
        }

        Ok(Self { reader })
    }

    /// Lazily deserializes one request per row.
    pub fn transactions(self) -> impl Iterator<Item = Result<TransactionRequest>> {
        self.reader
            .into_deserialize()
            .map(|row| row.map_err(ComplianceError::from))
    }
}
