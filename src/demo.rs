//! Sample accounts with back-dated history, so period filters have something
//! to show on a fresh start.

use chrono::Duration;

use crate::{
    common::{clock::Clock, error::LedgerError, money::Money},
    domain::{account::AccountKind, ledger::Ledger},
};

/// (account, category, amount, days ago), oldest first per account.
const DEMO_EXPENSES: &[(&str, &str, i64, i64)] = &[
    ("Cash", "Coffee", 15, 30),
    ("Cash", "Taxi", 50, 8),
    ("Cash", "Food", 120, 1),
    ("VISA_Card", "Sport", 100, 16),
    ("VISA_Card", "Groceries", 250, 3),
    ("Credit_MC", "Travel", 300, 31),
    ("Credit_MC", "Electronics", 400, 5),
];

/// Registers `Cash`, `VISA_Card` and `Credit_MC` and records their history
/// through the regular account operations, so balance rules apply to demo
/// data as well.
pub fn seed_demo<C: Clock>(ledger: &mut Ledger<C>) -> Result<(), LedgerError> {
    let now = ledger.now();
    let opened = now - Duration::days(35);

    let accounts = [
        ("Cash", AccountKind::Debit, 0, 500),
        ("VISA_Card", AccountKind::Debit, 0, 1000),
        ("Credit_MC", AccountKind::Credit, 1000, 700),
    ];
    for (name, kind, limit, opening) in accounts {
        ledger.register_account(name, kind, Money::units(limit))?;
        ledger
            .account_mut(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_owned()))?
            .deposit(Money::units(opening), opened)?;
    }

    for &(name, category, amount, days_ago) in DEMO_EXPENSES {
        let acc = ledger
            .account_mut(name)
            .ok_or_else(|| LedgerError::AccountNotFound(name.to_owned()))?;
        acc.spend(Money::units(amount), category, now - Duration::days(days_ago))?;
    }
    tracing::debug!(accounts = ledger.accounts().len(), "demo data seeded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::clock::FixedClock,
        domain::{period::Period, transaction::TxType},
    };
    use chrono::{TimeZone, Utc};

    fn seeded() -> Ledger<FixedClock> {
        let now = Utc.with_ymd_and_hms(2024, 6, 30, 18, 0, 0).unwrap();
        let mut ledger = Ledger::with_clock(FixedClock(now));
        seed_demo(&mut ledger).unwrap();
        ledger
    }

    #[test]
    fn balances_reflect_history() {
        let ledger = seeded();
        assert_eq!(ledger.account("Cash").unwrap().balance(), Money::units(315));
        assert_eq!(ledger.account("VISA_Card").unwrap().balance(), Money::units(650));
        assert_eq!(ledger.account("Credit_MC").unwrap().balance(), Money::units(0));
    }

    #[test]
    fn every_account_opens_with_a_deposit() {
        let ledger = seeded();
        for (name, opening) in [("Cash", 500), ("VISA_Card", 1000), ("Credit_MC", 700)] {
            let first = &ledger.account(name).unwrap().transactions()[0];
            assert_eq!(first.tx_type(), TxType::Deposit, "{name}");
            assert_eq!(first.amount(), Money::units(opening), "{name}");
        }
    }

    #[test]
    fn periods_split_the_history() {
        let ledger = seeded();
        assert_eq!(ledger.collect_transactions(Period::ALL_TIME).len(), 10);
        assert_eq!(ledger.collect_transactions(Period::DAY).len(), 1);
        assert_eq!(ledger.collect_transactions(Period::WEEK).len(), 3);
        // Coffee sits exactly on the 30-day cutoff
        assert_eq!(ledger.collect_transactions(Period::MONTH).len(), 6);

        let week: Vec<&str> = ledger
            .top_expenses(Period::WEEK, 3)
            .iter()
            .map(|tx| tx.category())
            .collect();
        assert_eq!(week, vec!["Electronics", "Groceries", "Food"]);
    }

    #[test]
    fn seeding_twice_is_rejected() {
        let mut ledger = seeded();
        assert!(matches!(
            seed_demo(&mut ledger),
            Err(LedgerError::DuplicateAccount(_))
        ));
    }
}
