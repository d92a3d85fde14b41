use std::cmp::Ordering;

use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;

pub type AccountId = String;

/// A single account: an identifier fixed at creation time and a balance
/// cell guarded by its own mutex. Whoever holds the mutex holds the
/// exclusive right to change the balance.
#[derive(Debug)]
pub struct Account {
    id: AccountId,
    balance: Mutex<Decimal>,
}

impl Account {
    /// The initial balance is taken as-is; only committed transfers
    /// guarantee non-negativity.
    pub fn new(id: impl Into<AccountId>, initial_balance: Decimal) -> Self {
        Self {
            id: id.into(),
            balance: Mutex::new(initial_balance),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Momentary snapshot of the balance. It may be stale by the time the
    /// caller looks at it; the transfer engine re-checks under the pair
    /// lock.
    pub fn balance(&self) -> Decimal {
        *self.balance.lock()
    }

    pub(crate) fn lock_balance(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock()
    }
}

// Accounts compare by identifier only. This ordering decides lock
// acquisition order for transfers and must stay stable for the lifetime of
// the account, so it is never based on memory identity.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}

impl PartialOrd for Account {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Account {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
