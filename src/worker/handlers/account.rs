use std::io::Write;

use crate::{
    common::{
        clock::Clock,
        error::{AppError, LedgerError},
        money::Money,
    },
    domain::{account::AccountKind, ledger::Ledger},
};

pub fn handle<C: Clock, W: Write>(
    ledger: &mut Ledger<C>,
    out: &mut W,
    name: &str,
    kind: AccountKind,
    credit_limit: Money,
) -> Result<(), AppError> {
    match ledger.register_account(name, kind, credit_limit) {
        Ok(()) => writeln!(out, "{kind} account added: {name}")?,
        Err(LedgerError::DuplicateAccount(_)) => {
            writeln!(out, "Account with this name already exists")?
        }
        Err(e) => writeln!(out, "Account not added: {e}")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::clock::FixedClock;
    use chrono::Utc;

    fn run(ledger: &mut Ledger<FixedClock>, name: &str, kind: AccountKind, limit: i64) -> String {
        let mut out = Vec::new();
        handle(ledger, &mut out, name, kind, Money::units(limit)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn reports_added_and_duplicate_accounts() {
        let mut ledger = Ledger::with_clock(FixedClock(Utc::now()));

        assert_eq!(run(&mut ledger, "Cash", AccountKind::Debit, 0), "DEBIT account added: Cash\n");
        assert_eq!(
            run(&mut ledger, "Cash", AccountKind::Credit, 100),
            "Account with this name already exists\n"
        );
        assert_eq!(ledger.account("Cash").unwrap().kind(), AccountKind::Debit);
    }

    #[test]
    fn reports_invalid_credit_limit() {
        let mut ledger = Ledger::with_clock(FixedClock(Utc::now()));
        let msg = run(&mut ledger, "Card", AccountKind::Credit, -5);
        assert_eq!(msg, "Account not added: credit limit must not be negative, got -5.00\n");
        assert!(ledger.account("Card").is_none());
    }
}
