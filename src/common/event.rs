use std::path::PathBuf;

use crate::{
    common::money::Money,
    domain::{account::AccountKind, period::Period},
};

/// Represents a command that is sent from the menu reader to the worker for processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    AddAccount {
        name: String,
        kind: AccountKind,
        credit_limit: Money,
    },
    Deposit {
        account: String,
        amount: Money,
    },
    Spend {
        account: String,
        amount: Money,
        category: String,
    },
    ShowTransactions { period: Period },
    ShowTopExpenses { period: Period },
    ShowTopCategories { period: Period },
    SaveReport { period: Period, path: PathBuf },
    SaveTopExpenses { period: Period, path: PathBuf },
    SaveTopCategories { period: Period, path: PathBuf },
    ExportCsv { period: Period, path: PathBuf },
    Exit,
}
