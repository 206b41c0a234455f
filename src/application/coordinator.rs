use crate::domain::account::{Account, AccountId};
use crate::domain::ports::{AccountStoreBox, NotifierBox};
use crate::domain::transfer::{TransferReceipt, TransferRequest};
use crate::error::Result;
use tracing::warn;

/// The main entry point for ledger operations.
///
/// `TransferCoordinator` never touches balances itself. Transfers are handed to
/// the store's atomic operation; once that returns, the store holds no locks and
/// the two parties are notified.
pub struct TransferCoordinator {
    account_store: AccountStoreBox,
    notifier: NotifierBox,
}

impl TransferCoordinator {
    /// Creates a new `TransferCoordinator`.
    ///
    /// # Arguments
    ///
    /// * `account_store` - The store owning all accounts.
    /// * `notifier` - Receives one message per party for each committed transfer.
    pub fn new(account_store: AccountStoreBox, notifier: NotifierBox) -> Self {
        Self {
            account_store,
            notifier,
        }
    }

    pub async fn create_account(&self, account: Account) -> Result<()> {
        self.account_store.create(account).await
    }

    pub async fn get_account(&self, id: &AccountId) -> Result<Option<Account>> {
        self.account_store.get(id).await
    }

    /// Returns every account, sorted by id.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        self.account_store.all_accounts().await
    }

    /// Removes all accounts. Must not race with in-flight transfers.
    pub async fn clear_accounts(&self) -> Result<()> {
        self.account_store.clear().await
    }

    /// Executes a transfer and notifies both parties.
    ///
    /// Store errors are returned unchanged and no notification is sent for
    /// them. Notification failures are logged and do not affect the result.
    pub async fn transfer(&self, request: TransferRequest) -> Result<TransferReceipt> {
        let receipt = self
            .account_store
            .transfer(&request.from, &request.to, request.amount)
            .await?;

        let debit_message = format!(
            "-${} has been deducted from the account and transferred to account Id: {}",
            request.amount, request.to
        );
        let credit_message = format!(
            "+${} has been credited to the account from the account Id: {}",
            request.amount, request.from
        );
        self.notify(&request.from, &debit_message).await;
        self.notify(&request.to, &credit_message).await;

        Ok(receipt)
    }

    async fn notify(&self, account: &AccountId, message: &str) {
        if let Err(e) = self.notifier.notify(account, message).await {
            warn!(%account, error = %e, "notification failed");
        }
    }
}
