use std::path::PathBuf;

use crate::common::money::Money;

/// Expected business outcomes of ledger operations. None of these are fatal;
/// the menu loop prints the message and keeps going.
#[derive(thiserror::Error, Debug)]
pub enum LedgerError {
    #[error("account already exists: {0}")]
    DuplicateAccount(String),
    #[error("account not found: {0}")]
    AccountNotFound(String),
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Money),
    #[error("amount out of range: {0}")]
    AmountOutOfRange(Money),
    #[error("credit limit must not be negative, got {0}")]
    InvalidCreditLimit(Money),
    #[error("insufficient funds in {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: String,
        balance: Money,
        requested: Money,
    },
    #[error(
        "credit limit exceeded for {account}: balance {balance}, limit {limit}, requested {requested}"
    )]
    CreditLimitExceeded {
        account: String,
        balance: Money,
        limit: Money,
        requested: Money,
    },
    #[error("failed to open file for writing: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LedgerError {
    /// True for the two spend rejections caused by the account's balance rule.
    pub fn is_funds_rejection(&self) -> bool {
        matches!(
            self,
            LedgerError::InsufficientFunds { .. } | LedgerError::CreditLimitExceeded { .. }
        )
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("unknown argument: {0}. usage: wallet_ledger [--no-demo] [--top <N>]")]
    UnknownArg(String),
    #[error("invalid value for {flag}: {value}")]
    InvalidArgValue { flag: &'static str, value: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}
