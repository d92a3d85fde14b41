//! This module could be a separate crate on its own, to bootstrap [`teller`](crate) within binary
//! but for simplicitly purposes, I include this module directly in binary.

use std::io::{Read, Write};

use anyhow::Result;
use thiserror::Error;

use crate::command::{Operation, OperationError};
use crate::notify::ChannelNotifier;
use crate::service::{InMemoryLedger, LedgerError};
use csv_parser::CsvOperationParser;
use csv_printer::{AccountRow, print_accounts};
pub mod csv_parser;
pub mod csv_printer;

/// Everything that can go wrong with a single input row.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Operation(#[from] OperationError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, RunError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let ledger = InMemoryLedger::new(Box::new(ChannelNotifier::spawn()));

        for (line, row) in parser {
            let outcome = Operation::parse(row.kind, row.account, row.to, row.amount)
                .map_err(RunError::from)
                .and_then(|op| ledger.execute(op).map_err(RunError::from));
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        print_accounts(
            self.output,
            ledger.store().iter().map(|account| AccountRow {
                account: account.id().to_owned(),
                balance: account.balance(),
            }),
        )
    }
}
