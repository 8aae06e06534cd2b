use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::{
    common::{
        clock::{Clock, SystemClock},
        error::LedgerError,
        money::Money,
    },
    domain::{
        account::{Account, AccountKind},
        period::Period,
        transaction::TransactionRecord,
    },
};

/// Summed expenses for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

/// Registry of accounts plus the cross-account queries the reports are built
/// from. Accounts keep their registration order.
#[derive(Debug, Default)]
pub struct Ledger<C: Clock = SystemClock> {
    accounts: Vec<Account>,
    index: HashMap<String, usize>,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            accounts: Vec::new(),
            index: HashMap::new(),
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.index.get(name).map(|&i| &self.accounts[i])
    }

    /// Mutable access for seeding back-dated history. Regular callers go
    /// through [`Ledger::deposit_to`] and [`Ledger::spend_from`].
    pub(crate) fn account_mut(&mut self, name: &str) -> Option<&mut Account> {
        self.index.get(name).map(|&i| &mut self.accounts[i])
    }

    /// Registers a new account with a zero balance. The limit is ignored for
    /// debit accounts.
    pub fn register_account(
        &mut self,
        name: &str,
        kind: AccountKind,
        credit_limit: Money,
    ) -> Result<(), LedgerError> {
        if self.index.contains_key(name) {
            warn!(account = name, "duplicate account registration rejected");
            return Err(LedgerError::DuplicateAccount(name.to_owned()));
        }
        if kind == AccountKind::Credit && credit_limit.is_negative() {
            warn!(account = name, limit = %credit_limit, "negative credit limit rejected");
            return Err(LedgerError::InvalidCreditLimit(credit_limit));
        }

        self.index.insert(name.to_owned(), self.accounts.len());
        self.accounts.push(Account::new(name, kind, credit_limit));
        info!(account = name, %kind, "account registered");
        Ok(())
    }

    /// Deposits into the named account and returns the new balance.
    pub fn deposit_to(&mut self, name: &str, amount: Money) -> Result<Money, LedgerError> {
        let now = self.clock.now();
        let account = self.lookup_mut(name)?;

        if let Err(e) = account.deposit(amount, now) {
            warn!(account = name, %amount, error = %e, "deposit rejected");
            return Err(e);
        }
        info!(account = name, %amount, balance = %account.balance(), "deposit recorded");
        Ok(account.balance())
    }

    /// Records an expense against the named account and returns the new balance.
    pub fn spend_from(
        &mut self,
        name: &str,
        category: &str,
        amount: Money,
    ) -> Result<Money, LedgerError> {
        let now = self.clock.now();
        let account = self.lookup_mut(name)?;

        if let Err(e) = account.spend(amount, category, now) {
            warn!(account = name, category, %amount, error = %e, "expense rejected");
            return Err(e);
        }
        info!(account = name, category, %amount, balance = %account.balance(), "expense recorded");
        Ok(account.balance())
    }

    /// Every in-period transaction, grouped by account in registration order
    /// and kept in insertion order within each account.
    pub fn collect_transactions(&self, period: Period) -> Vec<&TransactionRecord> {
        let now = self.clock.now();
        let collected: Vec<&TransactionRecord> = self
            .accounts
            .iter()
            .flat_map(|acc| acc.transactions())
            .filter(|tx| period.contains(tx.timestamp(), now))
            .collect();
        debug!(period = %period, count = collected.len(), "collected transactions");
        collected
    }

    /// Largest in-period expenses first. Equal amounts keep collection order.
    pub fn top_expenses(&self, period: Period, top_n: usize) -> Vec<&TransactionRecord> {
        let mut expenses: Vec<&TransactionRecord> = self
            .collect_transactions(period)
            .into_iter()
            .filter(|tx| tx.is_expense())
            .collect();
        // sort_by is stable
        expenses.sort_by(|a, b| b.amount().cmp(&a.amount()));
        expenses.truncate(top_n);
        expenses
    }

    /// Expense totals per category across all accounts, largest first. Equal
    /// totals are ordered by category name.
    pub fn top_categories(&self, period: Period, top_n: usize) -> Vec<CategoryTotal> {
        let mut sums: BTreeMap<&str, Money> = BTreeMap::new();
        for tx in self.collect_transactions(period) {
            if tx.is_expense() {
                let sum = sums.entry(tx.category()).or_insert_with(Money::zero);
                *sum = sum.saturating_add(tx.amount());
            }
        }

        let mut totals: Vec<CategoryTotal> = sums
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_owned(),
                total,
            })
            .collect();
        totals.sort_by(|a, b| b.total.cmp(&a.total));
        totals.truncate(top_n);
        totals
    }

    fn lookup_mut(&mut self, name: &str) -> Result<&mut Account, LedgerError> {
        match self.index.get(name) {
            Some(&i) => Ok(&mut self.accounts[i]),
            None => {
                warn!(account = name, "account not found");
                Err(LedgerError::AccountNotFound(name.to_owned()))
            }
        }
    }
}
