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
) -> Result<(), AppError> {
    match ledger.deposit_to(account, amount) {
        Ok(balance) => writeln!(out, "Deposit successful. Balance: {balance}")?,
        Err(e) => writeln!(out, "Deposit failed: {e}")?,
    }
    Ok(())
}
