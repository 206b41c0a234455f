use crate::error::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned identifier of an account.
///
/// Ordering is the plain string ordering; the store relies on it to lock
/// account pairs in a deterministic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A non-negative monetary value held by an account.
///
/// Wraps `rust_decimal::Decimal` so that balances are exact and can never be
/// constructed below zero. Arithmetic is only exposed through checked
/// operations taking an [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Balance(Decimal);

impl Balance {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::ValidationError(
                "Balance must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Whether this balance can fund a debit of `amount`.
    pub fn covers(&self, amount: Amount) -> bool {
        self.0 >= amount.0
    }

    /// Returns the balance after debiting `amount`, or `None` if it would go negative.
    pub fn checked_sub(self, amount: Amount) -> Option<Self> {
        if self.covers(amount) {
            self.0.checked_sub(amount.0).map(Self)
        } else {
            None
        }
    }

    /// Returns the balance after crediting `amount`, or `None` on decimal overflow.
    pub fn checked_add(self, amount: Amount) -> Option<Self> {
        self.0.checked_add(amount.0).map(Self)
    }
}

impl TryFrom<Decimal> for Balance {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Represents a transfer amount.
///
/// Zero is accepted (a zero transfer is a valid no-op); negative values are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, LedgerError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(LedgerError::ValidationError(
                "Amount must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = LedgerError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Snapshot of an account.
///
/// The store owns the live balance; values of this type are copies handed
/// in on creation and handed out on lookup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Account {
    /// The unique identifier for the account.
    #[serde(rename = "accountId")]
    pub id: AccountId,
    /// Funds held by the account.
    pub balance: Balance,
}

impl Account {
    /// Creates an account with a zero balance.
    pub fn new(id: impl Into<AccountId>) -> Self {
        Self {
            id: id.into(),
            balance: Balance::ZERO,
        }
    }

    /// Creates an account with an opening balance, rejecting negative values.
    pub fn with_balance(id: impl Into<AccountId>, balance: Decimal) -> Result<Self, LedgerError> {
        Ok(Self {
            id: id.into(),
            balance: Balance::new(balance)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.0)).is_ok());
        assert!(Amount::new(dec!(0.0)).is_ok());
        assert!(matches!(
            Amount::new(dec!(-0.01)),
            Err(LedgerError::ValidationError(_))
        ));
    }

    #[test]
    fn test_balance_rejects_negative() {
        assert!(Balance::new(dec!(0)).is_ok());
        assert!(matches!(
            Balance::new(dec!(-1)),
            Err(LedgerError::ValidationError(_))
        ));
    }

    #[test]
    fn test_balance_checked_sub() {
        let balance = Balance::new(dec!(10.0)).unwrap();
        let debited = balance.checked_sub(Amount::new(dec!(4.5)).unwrap());
        assert_eq!(debited, Some(Balance::new(dec!(5.5)).unwrap()));

        assert_eq!(
            balance.checked_sub(Amount::new(dec!(10.0)).unwrap()),
            Some(Balance::ZERO)
        );
        assert!(
            balance
                .checked_sub(Amount::new(dec!(10.0001)).unwrap())
                .is_none()
        );
    }

    #[test]
    fn test_balance_checked_add_overflow() {
        let balance = Balance::new(Decimal::MAX).unwrap();
        assert!(balance.checked_add(Amount::new(dec!(1)).unwrap()).is_none());
        assert_eq!(balance.checked_add(Amount::ZERO), Some(balance));
    }

    #[test]
    fn test_account_with_balance() {
        let account = Account::with_balance("Id-123", dec!(1000)).unwrap();
        assert_eq!(account.id, AccountId::from("Id-123"));
        assert_eq!(account.balance.value(), dec!(1000));

        assert!(matches!(
            Account::with_balance("Id-123", dec!(-5)),
            Err(LedgerError::ValidationError(_))
        ));
        assert_eq!(Account::new("Id-0").balance, Balance::ZERO);
    }

    #[test]
    fn test_account_id_ordering() {
        let mut ids = vec![AccountId::from("b"), AccountId::from("a"), AccountId::from("B")];
        ids.sort();
        assert_eq!(
            ids,
            vec![AccountId::from("B"), AccountId::from("a"), AccountId::from("b")]
        );
    }

    #[test]
    fn test_account_deserialization_rejects_negative_balance() {
        let ok: Account =
            serde_json::from_str(r#"{"accountId":"Id-1","balance":"12.50"}"#).unwrap();
        assert_eq!(ok.balance.value(), dec!(12.50));

        let negative = serde_json::from_str::<Account>(r#"{"accountId":"Id-1","balance":"-1"}"#);
        assert!(negative.is_err());
    }
}
