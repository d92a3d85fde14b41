use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountId},
    command::Operation,
    notify::{self, TransferNotifier},
    store::{AccountStore, StoreError},
    transfer::{self, TransferError},
};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Transfer(#[from] TransferError),
}

/// The operations the outside world gets.
///
/// NOTE: Technically this trait is not necessary, but it might be a good
/// integration point to replace the in memory implementation with
/// something more sophisticated.
pub trait Ledger {
    fn create_account(&self, id: AccountId, initial_balance: Decimal) -> Result<(), LedgerError>;

    fn account(&self, id: &str) -> Result<Arc<Account>, LedgerError>;

    fn transfer(
        &self,
        source_id: &str,
        destination_id: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError>;
}

pub struct InMemoryLedger {
    store: AccountStore,
    notifier: Box<dyn TransferNotifier>,
}

impl InMemoryLedger {
    pub fn new(notifier: Box<dyn TransferNotifier>) -> Self {
        Self {
            store: AccountStore::new(),
            notifier,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Dispatches a parsed boundary operation.
    pub fn execute(&self, operation: Operation) -> Result<(), LedgerError> {
        match operation {
            Operation::Open {
                account,
                initial_balance,
            } => self.create_account(account, initial_balance),
            Operation::Transfer {
                source,
                destination,
                amount,
            } => self.transfer(&source, &destination, amount),
        }
    }
}

impl Ledger for InMemoryLedger {
    fn create_account(&self, id: AccountId, initial_balance: Decimal) -> Result<(), LedgerError> {
        tracing::info!(account = %id, %initial_balance, "creating account");
        self.store.create(Account::new(id, initial_balance))?;
        Ok(())
    }

    fn account(&self, id: &str) -> Result<Arc<Account>, LedgerError> {
        Ok(self.store.get(id)?)
    }

    fn transfer(
        &self,
        source_id: &str,
        destination_id: &str,
        amount: Decimal,
    ) -> Result<(), LedgerError> {
        tracing::info!(source = %source_id, destination = %destination_id, %amount, "transfer requested");
        let source = self.store.get(source_id)?;
        let destination = self.store.get(destination_id)?;
        transfer::transfer(&source, &destination, amount)?;
        self.notifier
            .transfer_completed(source.id(), notify::TRANSFER_COMPLETED);
        Ok(())
    }
}
