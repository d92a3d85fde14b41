use std::io::Read;

use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{account::AccountId, command::OperationKind};

#[derive(Debug, Deserialize)]
pub struct OperationRow {
    #[serde(rename = "type")]
    pub kind: OperationKind,
    pub account: AccountId,
    pub to: Option<AccountId>,
    pub amount: Option<Decimal>,
}

/// Parses the operation list in CSV format
///
/// # Panics
///
/// If a row cannot be parsed
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, OperationRow>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, OperationRow);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row.unwrap()))
    }
}
