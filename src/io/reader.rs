use std::{
    io::{BufRead, Write},
    path::PathBuf,
    str::FromStr,
};

use crate::{
    common::{error::AppError, event::LedgerCommand, money::Money},
    domain::{account::AccountKind, period::Period},
};

/// Interactive numbered menu. Reads answers line by line and turns them into
/// [`LedgerCommand`]s; input problems are reported to the user and the menu is
/// shown again.
#[derive(Debug, Clone, Copy)]
pub struct Menu {
    top_n: usize,
}

/// Outcome of reading one prompt answer.
enum Answer<T> {
    Value(T),
    Invalid,
    Eof,
}

macro_rules! answer {
    ($expr:expr) => {
        match $expr {
            Answer::Value(v) => v,
            Answer::Invalid => continue,
            Answer::Eof => return Ok(None),
        }
    };
}

impl Menu {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Returns the next command, or `None` once input is exhausted.
    pub fn read_command<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<LedgerCommand>, AppError> {
        loop {
            self.print_menu(out)?;
            let choice: i32 = answer!(read_parsed(input, out, "Choice: ")?);

            let command = match choice {
                0 => LedgerCommand::Exit,
                1 => {
                    let name = answer!(read_name(input, out, "Enter account name: ")?);
                    let kind: i32 = answer!(read_parsed(input, out, "Type (1=DEBIT, 2=CREDIT): ")?);
                    if kind == 1 {
                        LedgerCommand::AddAccount {
                            name,
                            kind: AccountKind::Debit,
                            credit_limit: Money::zero(),
                        }
                    } else {
                        let credit_limit: Money = answer!(read_parsed(
                            input,
                            out,
                            "Enter credit limit (e.g. 1000): "
                        )?);
                        LedgerCommand::AddAccount {
                            name,
                            kind: AccountKind::Credit,
                            credit_limit,
                        }
                    }
                }
                2 => {
                    let account = answer!(read_name(input, out, "Account name to deposit into: ")?);
                    let amount = answer!(read_parsed(input, out, "Deposit amount: ")?);
                    LedgerCommand::Deposit { account, amount }
                }
                3 => {
                    let account = answer!(read_name(input, out, "Account name for expense: ")?);
                    let amount = answer!(read_parsed(input, out, "Expense amount: ")?);
                    let category = answer!(read_line(
                        input,
                        out,
                        "Expense category (e.g. Groceries, Transport): "
                    )?);
                    LedgerCommand::Spend {
                        account,
                        amount,
                        category,
                    }
                }
                4 => LedgerCommand::ShowTransactions {
                    period: answer!(choose_listing_period(input, out)?),
                },
                5 => LedgerCommand::ShowTopExpenses {
                    period: answer!(choose_ranking_period(input, out)?),
                },
                6 => LedgerCommand::ShowTopCategories {
                    period: answer!(choose_ranking_period(input, out)?),
                },
                7 => {
                    let period = answer!(choose_listing_period(input, out)?);
                    let path = answer!(read_path(input, out, "Filename for report (e.g. report.txt): ")?);
                    LedgerCommand::SaveReport { period, path }
                }
                8 => {
                    let period = answer!(choose_ranking_period(input, out)?);
                    let path = answer!(read_path(
                        input,
                        out,
                        "Filename for TOP expenses (e.g. top_exp.txt): "
                    )?);
                    LedgerCommand::SaveTopExpenses { period, path }
                }
                9 => {
                    let period = answer!(choose_ranking_period(input, out)?);
                    let path = answer!(read_path(
                        input,
                        out,
                        "Filename for TOP categories (e.g. top_cat.txt): "
                    )?);
                    LedgerCommand::SaveTopCategories { period, path }
                }
                10 => {
                    let period = answer!(choose_listing_period(input, out)?);
                    let path = answer!(read_path(
                        input,
                        out,
                        "Filename for CSV export (e.g. transactions.csv): "
                    )?);
                    LedgerCommand::ExportCsv { period, path }
                }
                _ => {
                    writeln!(out, "Unknown command")?;
                    continue;
                }
            };
            return Ok(Some(command));
        }
    }

    fn print_menu<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let n = self.top_n;
        writeln!(out, "\n--- MENU ---")?;
        writeln!(out, "1. Add account/card")?;
        writeln!(out, "2. Deposit to account/card")?;
        writeln!(out, "3. Add expense")?;
        writeln!(out, "4. Show all transactions (by period)")?;
        writeln!(out, "5. Show TOP-{n} expenses (week/month)")?;
        writeln!(out, "6. Show TOP-{n} categories (week/month)")?;
        writeln!(out, "7. Save report to file")?;
        writeln!(out, "8. Save TOP-{n} expenses to file (week/month)")?;
        writeln!(out, "9. Save TOP-{n} categories to file (week/month)")?;
        writeln!(out, "10. Export transactions to CSV")?;
        writeln!(out, "0. Exit")?;
        Ok(())
    }
}

/// Period selector for full listings: day, week, month, anything else is all time.
fn choose_listing_period<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Answer<Period>, AppError> {
    writeln!(out, "\nChoose period:\n1) Day\n2) Week\n3) Month\n0) All time")?;
    Ok(match read_parsed::<i32, _, _>(input, out, "Your choice: ")? {
        Answer::Value(1) => Answer::Value(Period::DAY),
        Answer::Value(2) => Answer::Value(Period::WEEK),
        Answer::Value(3) => Answer::Value(Period::MONTH),
        Answer::Eof => Answer::Eof,
        _ => Answer::Value(Period::ALL_TIME),
    })
}

/// Period selector for rankings: week, month, anything else is all time.
fn choose_ranking_period<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<Answer<Period>, AppError> {
    writeln!(out, "1) Week  2) Month  0) All time")?;
    Ok(match read_parsed::<i32, _, _>(input, out, "Your choice: ")? {
        Answer::Value(1) => Answer::Value(Period::WEEK),
        Answer::Value(2) => Answer::Value(Period::MONTH),
        Answer::Eof => Answer::Eof,
        _ => Answer::Value(Period::ALL_TIME),
    })
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Answer<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(Answer::Eof);
    }
    Ok(Answer::Value(buf.trim().to_string()))
}

fn read_name<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Answer<String>, AppError> {
    Ok(match read_line(input, out, prompt)? {
        Answer::Value(name) if name.is_empty() => {
            writeln!(out, "Account name must not be empty")?;
            Answer::Invalid
        }
        other => other,
    })
}

fn read_path<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Answer<PathBuf>, AppError> {
    Ok(match read_line(input, out, prompt)? {
        Answer::Value(path) if path.is_empty() => {
            writeln!(out, "File name must not be empty")?;
            Answer::Invalid
        }
        Answer::Value(path) => Answer::Value(PathBuf::from(path)),
        Answer::Invalid => Answer::Invalid,
        Answer::Eof => Answer::Eof,
    })
}

fn read_parsed<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Answer<T>, AppError> {
    Ok(match read_line(input, out, prompt)? {
        Answer::Value(text) => match text.parse::<T>() {
            Ok(v) => Answer::Value(v),
            Err(_) => {
                writeln!(out, "Invalid input")?;
                Answer::Invalid
            }
        },
        Answer::Invalid => Answer::Invalid,
        Answer::Eof => Answer::Eof,
    })
}
