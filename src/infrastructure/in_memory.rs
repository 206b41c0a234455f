use crate::domain::account::{Account, AccountId, Amount, Balance};
use crate::domain::ports::AccountStore;
use crate::domain::transfer::TransferReceipt;
use crate::error::{LedgerError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};

type BalanceCell = Arc<Mutex<Balance>>;

/// A thread-safe in-memory store for accounts.
///
/// The map is guarded by an `RwLock` and only write-locked to insert or clear.
/// Each balance sits behind its own `Mutex`, so transfers on disjoint account
/// pairs run in parallel while transfers sharing an account are serialized by
/// that account's lock. A transfer locks both balances in ascending id order
/// before touching either, which rules out circular waits between opposite
/// transfers over the same pair.
#[derive(Default, Clone)]
pub struct InMemoryAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, BalanceCell>>>,
}

impl InMemoryAccountStore {
    /// Creates a new, empty in-memory account store.
    pub fn new() -> Self {
        Self::default()
    }

    async fn cell(&self, id: &AccountId) -> Option<BalanceCell> {
        let accounts = self.accounts.read().await;
        accounts.get(id).cloned()
    }
}

/// Locks two distinct balances in ascending id order and returns the guards
/// as `(from, to)`.
async fn lock_pair<'a>(
    from: (&AccountId, &'a BalanceCell),
    to: (&AccountId, &'a BalanceCell),
) -> (MutexGuard<'a, Balance>, MutexGuard<'a, Balance>) {
    if from.0 < to.0 {
        let from_guard = from.1.lock().await;
        let to_guard = to.1.lock().await;
        (from_guard, to_guard)
    } else {
        let to_guard = to.1.lock().await;
        let from_guard = from.1.lock().await;
        (from_guard, to_guard)
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn create(&self, account: Account) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        match accounts.entry(account.id) {
            Entry::Occupied(entry) => {
                warn!(account = %entry.key(), "account already exists");
                Err(LedgerError::DuplicateAccount(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                info!(account = %entry.key(), balance = %account.balance, "account created");
                entry.insert(Arc::new(Mutex::new(account.balance)));
                Ok(())
            }
        }
    }

    async fn get(&self, id: &AccountId) -> Result<Option<Account>> {
        let Some(cell) = self.cell(id).await else {
            debug!(account = %id, "account not found");
            return Ok(None);
        };
        let balance = *cell.lock().await;
        Ok(Some(Account {
            id: id.clone(),
            balance,
        }))
    }

    async fn all_accounts(&self) -> Result<Vec<Account>> {
        let mut cells: Vec<(AccountId, BalanceCell)> = {
            let accounts = self.accounts.read().await;
            accounts
                .iter()
                .map(|(id, cell)| (id.clone(), cell.clone()))
                .collect()
        };
        cells.sort_by(|a, b| a.0.cmp(&b.0));

        // Every balance stays locked until all are read, so no transfer can
        // land between two reads. Ascending id order matches `lock_pair`.
        let mut guards = Vec::with_capacity(cells.len());
        for (_, cell) in &cells {
            guards.push(cell.lock().await);
        }
        let snapshot = cells
            .iter()
            .zip(&guards)
            .map(|((id, _), balance)| Account {
                id: id.clone(),
                balance: **balance,
            })
            .collect();
        drop(guards);
        Ok(snapshot)
    }

    async fn clear(&self) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let removed = accounts.len();
        accounts.clear();
        info!(removed, "accounts cleared");
        Ok(())
    }

    async fn transfer(
        &self,
        from: &AccountId,
        to: &AccountId,
        amount: Amount,
    ) -> Result<TransferReceipt> {
        // Handles are cloned out so the map lock is not held while waiting on balances.
        let (from_cell, to_cell) = {
            let accounts = self.accounts.read().await;
            let Some(from_cell) = accounts.get(from).cloned() else {
                warn!(account = %from, "transfer source not found");
                return Err(LedgerError::AccountNotFound(from.clone()));
            };
            (from_cell, accounts.get(to).cloned())
        };

        match to_cell {
            None => {
                // Sufficiency is checked before the destination is reported missing.
                let balance = from_cell.lock().await;
                if !balance.covers(amount) {
                    warn!(account = %from, %amount, "insufficient balance");
                    return Err(LedgerError::InsufficientBalance(from.clone()));
                }
                warn!(account = %to, "transfer destination not found");
                return Err(LedgerError::AccountNotFound(to.clone()));
            }
            Some(_) if from == to => {
                let balance = from_cell.lock().await;
                if !balance.covers(amount) {
                    warn!(account = %from, %amount, "insufficient balance");
                    return Err(LedgerError::InsufficientBalance(from.clone()));
                }
            }
            Some(to_cell) => {
                let (mut from_balance, mut to_balance) =
                    lock_pair((from, &from_cell), (to, &to_cell)).await;

                let Some(debited) = from_balance.checked_sub(amount) else {
                    warn!(account = %from, %amount, "insufficient balance");
                    return Err(LedgerError::InsufficientBalance(from.clone()));
                };
                let Some(credited) = to_balance.checked_add(amount) else {
                    warn!(account = %to, %amount, "credit would overflow");
                    return Err(LedgerError::BalanceOverflow(to.clone()));
                };

                *from_balance = debited;
                *to_balance = credited;
            }
        }

        let receipt = TransferReceipt::generate();
        info!(%from, %to, %amount, receipt = %receipt.id(), "transfer committed");
        Ok(receipt)
    }
}
