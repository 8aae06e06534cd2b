use chrono::{DateTime, Utc};

use crate::common::money::Money;

/// Category label recorded on every deposit.
pub const DEPOSIT_CATEGORY: &str = "Deposit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxType {
    Deposit,
    Expense,
}

impl TxType {
    pub fn label(&self) -> &'static str {
        match self {
            TxType::Deposit => "Deposit",
            TxType::Expense => "Expense",
        }
    }
}

/// One accepted deposit or expense. Fields are private so a record cannot be
/// edited once its account has stored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    account: String,
    category: String,
    amount: Money,
    tx_type: TxType,
    timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub(crate) fn new(
        account: &str,
        category: &str,
        amount: Money,
        tx_type: TxType,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            account: account.to_owned(),
            category: category.to_owned(),
            amount,
            tx_type,
            timestamp,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Always positive; direction is carried by [`TxType`].
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    pub fn is_expense(&self) -> bool {
        self.tx_type == TxType::Expense
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
