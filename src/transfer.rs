use std::cmp::Ordering;

use parking_lot::MutexGuard;
use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

use crate::account::{Account, AccountId};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Amount should be positive!")]
    InvalidAmount,
    #[error("Account id {0} insufficient balance!")]
    InsufficientFunds(AccountId),
}

/// Moves `amount` from `source` to `destination`.
///
/// Locks are always acquired in identifier order, never in caller order,
/// so two transfers over the same pair in opposite directions cannot
/// deadlock. Funds are checked once before locking as a fast rejection and
/// again under the pair lock; the in-lock check is the one that counts, so
/// a committed transfer never leaves the source negative no matter how the
/// callers interleave.
pub fn transfer(
    source: &Account,
    destination: &Account,
    amount: Decimal,
) -> Result<(), TransferError> {
    check_amount(amount)?;
    check_funds(source.id(), source.balance(), amount)?;

    match source.cmp(destination) {
        // Degenerate self-transfer: a single acquisition, net-zero update.
        Ordering::Equal => {
            let balance = source.lock_balance();
            check_funds(source.id(), *balance, amount)
        }
        Ordering::Less => {
            let src = source.lock_balance();
            let dst = destination.lock_balance();
            apply(source.id(), src, dst, amount)
        }
        Ordering::Greater => {
            let dst = destination.lock_balance();
            let src = source.lock_balance();
            apply(source.id(), src, dst, amount)
        }
    }
}

/// The critical section. Both guards are held on entry and released on
/// every exit path, including the in-lock funds rejection.
fn apply(
    source_id: &str,
    mut source: MutexGuard<'_, Decimal>,
    mut destination: MutexGuard<'_, Decimal>,
    amount: Decimal,
) -> Result<(), TransferError> {
    check_funds(source_id, *source, amount)?;
    *source -= amount;
    *destination += amount;
    Ok(())
}

fn check_amount(amount: Decimal) -> Result<(), TransferError> {
    if amount < Decimal::zero() {
        return Err(TransferError::InvalidAmount);
    }
    Ok(())
}

fn check_funds(id: &str, balance: Decimal, amount: Decimal) -> Result<(), TransferError> {
    if balance < amount {
        return Err(TransferError::InsufficientFunds(id.to_owned()));
    }
    Ok(())
}
