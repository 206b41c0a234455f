use super::account::{AccountId, Amount};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A request to move `amount` from one account to another.
///
/// `from` and `to` may name the same account; such a transfer leaves the
/// balance unchanged but is still checked for sufficient funds.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct TransferRequest {
    #[serde(rename = "accountFromId")]
    pub from: AccountId,
    #[serde(rename = "accountToId")]
    pub to: AccountId,
    pub amount: Amount,
}

impl TransferRequest {
    pub fn new(from: impl Into<AccountId>, to: impl Into<AccountId>, amount: Amount) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

/// Opaque identifier issued for every committed transfer.
///
/// Used for traceability only; submitting the same request twice yields two
/// receipts and two transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransferReceipt(Uuid);

impl TransferReceipt {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for TransferReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction Id: {}", self.0)
    }
}
