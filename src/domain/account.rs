use std::fmt;

use chrono::{DateTime, Utc};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::transaction::{DEPOSIT_CATEGORY, TransactionRecord, TxType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// No overdraft: the balance never drops below zero.
    Debit,
    /// May go negative down to `-credit_limit`.
    Credit,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccountKind::Debit => "DEBIT",
            AccountKind::Credit => "CREDIT",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    name: String,
    kind: AccountKind,
    balance: Money,
    /// Zero for debit accounts.
    credit_limit: Money,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    pub(crate) fn new(name: &str, kind: AccountKind, credit_limit: Money) -> Self {
        let credit_limit = match kind {
            AccountKind::Debit => Money::zero(),
            AccountKind::Credit => credit_limit,
        };
        Self {
            name: name.to_owned(),
            kind,
            balance: Money::zero(),
            credit_limit,
            transactions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn credit_limit(&self) -> Money {
        self.credit_limit
    }

    /// Recorded transactions in insertion order.
    pub fn transactions(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Money, at: DateTime<Utc>) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::AmountOutOfRange(amount))?;
        self.transactions.push(TransactionRecord::new(
            &self.name,
            DEPOSIT_CATEGORY,
            amount,
            TxType::Deposit,
            at,
        ));
        Ok(())
    }

    /// Records an expense if the account's spending rule allows it. A rejected
    /// expense leaves the balance and history untouched.
    pub fn spend(
        &mut self,
        amount: Money,
        category: &str,
        at: DateTime<Utc>,
    ) -> Result<(), LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount(amount));
        }
        self.balance = self.check_spend(amount)?;
        self.transactions.push(TransactionRecord::new(
            &self.name,
            category,
            amount,
            TxType::Expense,
            at,
        ));
        Ok(())
    }

    /// Returns the balance after `amount` is spent, or why it can't be.
    fn check_spend(&self, amount: Money) -> Result<Money, LedgerError> {
        let after = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::AmountOutOfRange(amount))?;
        match self.kind {
            AccountKind::Debit if after.is_negative() => Err(LedgerError::InsufficientFunds {
                account: self.name.clone(),
                balance: self.balance,
                requested: amount,
            }),
            AccountKind::Credit if after < -self.credit_limit => {
                Err(LedgerError::CreditLimitExceeded {
                    account: self.name.clone(),
                    balance: self.balance,
                    limit: self.credit_limit,
                    requested: amount,
                })
            }
            _ => Ok(after),
        }
    }
}
