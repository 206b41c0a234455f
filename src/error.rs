use crate::domain::account::AccountId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Account id {0} already exists!")]
    DuplicateAccount(AccountId),
    #[error("Account id {0} not found!")]
    AccountNotFound(AccountId),
    #[error("Account id {0} doesn't have the sufficient balance to transfer!")]
    InsufficientBalance(AccountId),
    #[error("Account id {0} balance would overflow")]
    BalanceOverflow(AccountId),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
