//! Plain-text renderings of ledger queries.
//!
//! Every report is rendered into a `String` first; the console prints it and
//! the file variants hand the same text to [`crate::io::writer::save_report`].

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::{
    common::clock::Clock,
    domain::{ledger::Ledger, period::Period, transaction::TransactionRecord},
};

/// Formats a timestamp as `YYYY-MM-DD HH:MM` in local time; `None` renders `-`.
pub fn format_timestamp(ts: Option<DateTime<Utc>>) -> String {
    format_timestamp_in(ts, &Local)
}

pub fn format_timestamp_in<Tz>(ts: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match ts {
        Some(ts) => ts.with_timezone(tz).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

pub fn render_transactions<C: Clock>(ledger: &Ledger<C>, period: Period) -> String {
    render_transactions_in(ledger, period, &Local)
}

pub fn render_top_expenses<C: Clock>(ledger: &Ledger<C>, period: Period, top_n: usize) -> String {
    render_top_expenses_in(ledger, period, top_n, &Local)
}

/// Full listing: one block per account, then a period-wide notice if nothing
/// matched at all.
pub fn render_transactions_in<C, Tz>(ledger: &Ledger<C>, period: Period, tz: &Tz) -> String
where
    C: Clock,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let now = ledger.now();
    let mut out = Lines::titled(format!("REPORT ({period})"));
    let mut any = false;

    for acc in ledger.accounts() {
        out.blank();
        out.push(format!(
            "Account: {} | Type: {} | Balance: {}",
            acc.name(),
            acc.kind(),
            acc.balance()
        ));

        let mut empty = true;
        for tx in acc
            .transactions()
            .iter()
            .filter(|tx| period.contains(tx.timestamp(), now))
        {
            out.push(transaction_line(tx, tz));
            empty = false;
        }
        if empty {
            out.push("  No transactions for the selected period.");
        }
        any |= !empty;
    }

    if !any {
        out.blank();
        out.push("No transactions found for the selected period.");
    }
    out.finish()
}

pub fn render_top_expenses_in<C, Tz>(
    ledger: &Ledger<C>,
    period: Period,
    top_n: usize,
    tz: &Tz,
) -> String
where
    C: Clock,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = Lines::titled(format!("TOP-{top_n} EXPENSES ({period})"));
    let top = ledger.top_expenses(period, top_n);
    if top.is_empty() {
        out.push("No expenses for the period.");
    }
    for (rank, tx) in top.iter().enumerate() {
        out.push(format!(
            "{}. Account: {} | Category: {} | Amount: {} | Date: {}",
            rank + 1,
            tx.account(),
            tx.category(),
            tx.amount(),
            format_timestamp_in(Some(tx.timestamp()), tz)
        ));
    }
    out.finish()
}

pub fn render_top_categories<C: Clock>(ledger: &Ledger<C>, period: Period, top_n: usize) -> String {
    let mut out = Lines::titled(format!("TOP-{top_n} CATEGORIES ({period})"));
    let top = ledger.top_categories(period, top_n);
    if top.is_empty() {
        out.push("No expenses for the period.");
    }
    for (rank, entry) in top.iter().enumerate() {
        out.push(format!(
            "{}. Category: {} | Sum: {}",
            rank + 1,
            entry.category,
            entry.total
        ));
    }
    out.finish()
}

fn transaction_line<Tz>(tx: &TransactionRecord, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{} | Account: {} | Category: {} | Amount: {} | Date: {}",
        tx.tx_type().label(),
        tx.account(),
        tx.category(),
        tx.amount(),
        format_timestamp_in(Some(tx.timestamp()), tz)
    )
}

/// Newline-terminated line buffer.
struct Lines(Vec<String>);

impl Lines {
    fn titled(title: String) -> Self {
        Lines(vec![title])
    }

    fn push(&mut self, line: impl Into<String>) {
        self.0.push(line.into());
    }

    fn blank(&mut self) {
        self.0.push(String::new());
    }

    fn finish(self) -> String {
        let mut text = self.0.join("\n");
        text.push('\n');
        text
    }
}
