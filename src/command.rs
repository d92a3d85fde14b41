use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::account::AccountId;

/// Row discriminator for the service runner input.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Transfer,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("A destination account is required for {kind:?}")]
    DestinationRequired { kind: OperationKind },
}

/// A fully formed request against the ledger. Amount signs and balance
/// sufficiency are the engine's business, not the parser's.
#[derive(Debug, Clone)]
pub enum Operation {
    Open {
        account: AccountId,
        initial_balance: Decimal,
    },
    Transfer {
        source: AccountId,
        destination: AccountId,
        amount: Decimal,
    },
}

impl Operation {
    pub fn parse(
        kind: OperationKind,
        account: AccountId,
        to: Option<AccountId>,
        amount: Option<Decimal>,
    ) -> Result<Self, OperationError> {
        let amount = amount.ok_or(OperationError::AmountRequired { kind })?;
        match kind {
            OperationKind::Open => Ok(Self::Open {
                account,
                initial_balance: amount,
            }),
            OperationKind::Transfer => {
                let destination = to.ok_or(OperationError::DestinationRequired { kind })?;
                Ok(Self::Transfer {
                    source: account,
                    destination,
                    amount,
                })
            }
        }
    }
}
