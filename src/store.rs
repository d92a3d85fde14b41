use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use thiserror::Error;

use crate::account::{Account, AccountId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),
    #[error("Account id {0} does not exist!")]
    AccountNotFound(AccountId),
}

/// Owns every account record. Accounts are only ever inserted, never
/// removed, and are handed out as shared handles so transfers can mutate
/// balances in place while the store keeps accepting creations and lookups.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<AccountId, Arc<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-if-absent. On conflict the existing record is left untouched.
    pub fn create(&self, account: Account) -> Result<Arc<Account>, StoreError> {
        match self.accounts.entry(account.id().to_owned()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateAccount(account.id().to_owned())),
            Entry::Vacant(entry) => {
                let account = Arc::new(account);
                entry.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    pub fn get(&self, id: &str) -> Result<Arc<Account>, StoreError> {
        self.accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| StoreError::AccountNotFound(id.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Every account handle, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Arc<Account>> + '_ {
        self.accounts.iter().map(|entry| Arc::clone(entry.value()))
    }
}
