use crate::domain::account::{Account, AccountId, Amount};
use crate::domain::transfer::TransferRequest;
use crate::error::{LedgerError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Create,
    Transfer,
}

/// One raw CSV row: `type, from, to, amount`.
///
/// For `create`, `from` is the new account id and `amount` the opening
/// balance (zero when empty); `to` is ignored.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub r#type: CommandType,
    pub from: AccountId,
    pub to: Option<AccountId>,
    pub amount: Option<Decimal>,
}

/// A validated ledger command ready to be applied.
#[derive(Debug, PartialEq, Clone)]
pub enum LedgerCommand {
    Create(Account),
    Transfer(TransferRequest),
}

fn non_empty(id: AccountId, field: &str) -> Result<AccountId> {
    if id.as_str().is_empty() {
        Err(LedgerError::ValidationError(format!("{field} must not be empty")))
    } else {
        Ok(id)
    }
}

impl TryFrom<CommandRecord> for LedgerCommand {
    type Error = LedgerError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        let from = non_empty(record.from, "from")?;
        match record.r#type {
            CommandType::Create => {
                let balance = record.amount.unwrap_or(Decimal::ZERO);
                Ok(Self::Create(Account::with_balance(from, balance)?))
            }
            CommandType::Transfer => {
                let to = record.to.ok_or_else(|| {
                    LedgerError::ValidationError("transfer requires a destination".to_string())
                })?;
                let to = non_empty(to, "to")?;
                let amount = record.amount.ok_or_else(|| {
                    LedgerError::ValidationError("transfer requires an amount".to_string())
                })?;
                Ok(Self::Transfer(TransferRequest::new(
                    from,
                    to,
                    Amount::new(amount)?,
                )))
            }
        }
    }
}

/// Reads ledger commands from a CSV source.
///
/// Wraps `csv::Reader` with whitespace trimming and flexible record lengths, and
/// yields one `Result<LedgerCommand>` per row so a bad row can be skipped
/// without aborting the whole batch.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates commands.
    pub fn commands(self) -> impl Iterator<Item = Result<LedgerCommand>> {
        self.reader
            .into_deserialize::<CommandRecord>()
            .map(|result| {
                result
                    .map_err(LedgerError::from)
                    .and_then(LedgerCommand::try_from)
            })
    }
}
