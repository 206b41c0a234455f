use crate::domain::account::Account;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct AccountRecord<'a> {
    account: &'a str,
    balance: Decimal,
}

/// Writes account balances as CSV (`account,balance`).
///
/// The header is always written, even when there are no accounts. Balances
/// are normalized, so `2000.00` is written as `2000`.
pub struct AccountWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(sink);
        Self { writer }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        self.writer.write_record(["account", "balance"])?;
        for account in accounts {
            self.writer.serialize(AccountRecord {
                account: account.id.as_str(),
                balance: account.balance.value().normalize(),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
