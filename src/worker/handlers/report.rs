use std::{io::Write, path::Path};

use crate::{
    common::{clock::Clock, error::AppError},
    domain::{ledger::Ledger, period::Period},
    io::{report, writer},
};

/// Which rendering a report command asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Transactions,
    TopExpenses,
    TopCategories,
}

pub fn render<C: Clock>(ledger: &Ledger<C>, kind: ReportKind, period: Period, top_n: usize) -> String {
    match kind {
        ReportKind::Transactions => report::render_transactions(ledger, period),
        ReportKind::TopExpenses => report::render_top_expenses(ledger, period, top_n),
        ReportKind::TopCategories => report::render_top_categories(ledger, period, top_n),
    }
}

pub fn show<C: Clock, W: Write>(
    ledger: &Ledger<C>,
    out: &mut W,
    kind: ReportKind,
    period: Period,
    top_n: usize,
) -> Result<(), AppError> {
    write!(out, "\n{}", render(ledger, kind, period, top_n))?;
    Ok(())
}

pub fn save<C: Clock, W: Write>(
    ledger: &Ledger<C>,
    out: &mut W,
    kind: ReportKind,
    period: Period,
    top_n: usize,
    path: &Path,
) -> Result<(), AppError> {
    let text = render(ledger, kind, period, top_n);
    match writer::save_report(path, text.as_bytes()) {
        Ok(()) => writeln!(out, "Report saved to file: {}", path.display())?,
        Err(e) => writeln!(out, "Report not saved: {e}")?,
    }
    Ok(())
}

pub fn export_csv<C: Clock, W: Write>(
    ledger: &Ledger<C>,
    out: &mut W,
    period: Period,
    path: &Path,
) -> Result<(), AppError> {
    let mut buf = Vec::new();
    writer::write_transactions_csv(&mut buf, &ledger.collect_transactions(period))?;
    match writer::save_report(path, &buf) {
        Ok(()) => writeln!(out, "Transactions exported to file: {}", path.display())?,
        Err(e) => writeln!(out, "Export failed: {e}")?,
    }
    Ok(())
}
