use std::io::Write;

use crate::{
    common::{clock::Clock, error::AppError, event::LedgerCommand},
    domain::ledger::Ledger,
    worker::handlers::{
        account, deposit,
        report::{self, ReportKind},
        spend,
    },
};

/// Whether the menu loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Dispatches menu commands to their handlers. Business rejections are
/// printed by the handlers; only output failures come back as errors.
#[derive(Debug, Clone, Copy)]
pub struct Processor {
    top_n: usize,
}

impl Processor {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn process<C: Clock, W: Write>(
        &mut self,
        ledger: &mut Ledger<C>,
        out: &mut W,
        command: LedgerCommand,
    ) -> Result<Flow, AppError> {
        let top_n = self.top_n;
        match command {
            LedgerCommand::AddAccount {
                name,
                kind,
                credit_limit,
            } => account::handle(ledger, out, &name, kind, credit_limit)?,
            LedgerCommand::Deposit { account, amount } => {
                deposit::handle(ledger, out, &account, amount)?
            }
            LedgerCommand::Spend {
                account,
                amount,
                category,
            } => spend::handle(ledger, out, &account, amount, &category)?,
            LedgerCommand::ShowTransactions { period } => {
                report::show(ledger, out, ReportKind::Transactions, period, top_n)?
            }
            LedgerCommand::ShowTopExpenses { period } => {
                report::show(ledger, out, ReportKind::TopExpenses, period, top_n)?
            }
            LedgerCommand::ShowTopCategories { period } => {
                report::show(ledger, out, ReportKind::TopCategories, period, top_n)?
            }
            LedgerCommand::SaveReport { period, path } => {
                report::save(ledger, out, ReportKind::Transactions, period, top_n, &path)?
            }
            LedgerCommand::SaveTopExpenses { period, path } => {
                report::save(ledger, out, ReportKind::TopExpenses, period, top_n, &path)?
            }
            LedgerCommand::SaveTopCategories { period, path } => {
                report::save(ledger, out, ReportKind::TopCategories, period, top_n, &path)?
            }
            LedgerCommand::ExportCsv { period, path } => {
                report::export_csv(ledger, out, period, &path)?
            }
            LedgerCommand::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::{clock::FixedClock, money::Money},
        domain::{account::AccountKind, period::Period},
    };
    use chrono::Utc;

    fn process_all(commands: Vec<LedgerCommand>) -> (Ledger<FixedClock>, String, Flow) {
        let mut ledger = Ledger::with_clock(FixedClock(Utc::now()));
        let mut processor = Processor::new(3);
        let mut out = Vec::new();
        let mut flow = Flow::Continue;
        for cmd in commands {
            flow = processor.process(&mut ledger, &mut out, cmd).unwrap();
        }
        (ledger, String::from_utf8(out).unwrap(), flow)
    }

    #[test]
    fn cash_scenario_end_to_end() {
        let (ledger, out, flow) = process_all(vec![
            LedgerCommand::AddAccount {
                name: "Cash".into(),
                kind: AccountKind::Debit,
                credit_limit: Money::zero(),
            },
            LedgerCommand::Deposit {
                account: "Cash".into(),
                amount: Money::units(500),
            },
            LedgerCommand::Spend {
                account: "Cash".into(),
                amount: Money::units(120),
                category: "Food".into(),
            },
            LedgerCommand::Spend {
                account: "Cash".into(),
                amount: Money::units(500),
                category: "Rent".into(),
            },
            LedgerCommand::ShowTopExpenses {
                period: Period::ALL_TIME,
            },
        ]);

        assert_eq!(flow, Flow::Continue);
        assert_eq!(ledger.account("Cash").unwrap().balance(), Money::units(380));
        assert!(out.contains("Expense added. Balance: 380.00"));
        assert!(out.contains("Expense rejected: insufficient funds in Cash"));
        assert!(out.contains("1. Account: Cash | Category: Food | Amount: 120.00"));
        assert!(!out.contains("2. Account"));
    }

    #[test]
    fn exit_stops_the_loop() {
        let (_, out, flow) = process_all(vec![LedgerCommand::Exit]);
        assert_eq!(flow, Flow::Exit);
        assert!(out.is_empty());
    }

    #[test]
    fn categories_from_two_accounts_are_merged() {
        let (_, out, _) = process_all(vec![
            LedgerCommand::AddAccount {
                name: "Cash".into(),
                kind: AccountKind::Debit,
                credit_limit: Money::zero(),
            },
            LedgerCommand::AddAccount {
                name: "Card".into(),
                kind: AccountKind::Credit,
                credit_limit: Money::units(1000),
            },
            LedgerCommand::Deposit {
                account: "Cash".into(),
                amount: Money::units(100),
            },
            LedgerCommand::Spend {
                account: "Cash".into(),
                amount: Money::units(50),
                category: "Food".into(),
            },
            LedgerCommand::Spend {
                account: "Card".into(),
                amount: Money::units(70),
                category: "Food".into(),
            },
            LedgerCommand::ShowTopCategories {
                period: Period::WEEK,
            },
        ]);

        assert!(out.contains("1. Category: Food | Sum: 120.00\n"));
    }
}
