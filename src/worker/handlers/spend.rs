use std::io::Write;

use crate::{
    common::{clock::Clock, error::AppError, money::Money},
    domain::ledger::Ledger,
};

pub fn handle<C: Clock, W: Write>(
    ledger: &mut Ledger<C>,
    out: &mut W,
    account: &str,
    amount: Money,
    category: &str,
) -> Result<(), AppError> {
    match ledger.spend_from(account, category, amount) {
        Ok(balance) => writeln!(out, "Expense added. Balance: {balance}")?,
        Err(e) => writeln!(out, "Expense rejected: {e}")?,
    }
    Ok(())
}
