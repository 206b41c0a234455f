use super::account::{Account, AccountId, Amount};
use super::transfer::TransferReceipt;
use crate::error::Result;
use async_trait::async_trait;

/// Owner of every account and the only place balances change.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts `account` unless its id is taken, in one atomic step.
    async fn create(&self, account: Account) -> Result<()>;
    async fn get(&self, id: &AccountId) -> Result<Option<Account>>;
    /// Snapshot of all accounts, sorted by id, never showing half of a transfer.
    async fn all_accounts(&self) -> Result<Vec<Account>>;
    /// Removes every account. Not ordered relative to in-flight transfers.
    async fn clear(&self) -> Result<()>;
    /// Debits `from` and credits `to` atomically.
    ///
    /// Checks run in order: `from` exists, `from` covers `amount`, `to`
    /// exists. The first failing check is returned and nothing changes.
    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<TransferReceipt>;
}

/// Delivers a message to an account holder.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, account: &AccountId, message: &str) -> Result<()>;
}

pub type AccountStoreBox = Box<dyn AccountStore>;
pub type NotifierBox = Box<dyn Notifier>;
