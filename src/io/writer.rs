use std::{
    io::{BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::{
    common::error::LedgerError,
    domain::transaction::TransactionRecord,
};

/// Writes an already rendered report to `path`.
///
/// The text goes to a temporary file beside `path`, which is renamed over
/// `path` only after every byte is flushed. A failure at any step leaves no
/// partial report and removes the temporary file.
///
/// # Errors
///
/// Returns [`LedgerError::FileWrite`] if the file cannot be created or the
/// write does not complete.
pub fn save_report(path: &Path, contents: &[u8]) -> Result<(), LedgerError> {
    let to_error = |source: std::io::Error| {
        warn!(path = %path.display(), error = %source, "report not written");
        LedgerError::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let staged = NamedTempFile::new_in(dir).map_err(to_error)?;

    let mut out = BufWriter::new(staged);
    out.write_all(contents).map_err(to_error)?;
    let staged = out.into_inner().map_err(|e| to_error(e.into_error()))?;
    staged.as_file().sync_all().map_err(to_error)?;
    staged.persist(path).map_err(|e| to_error(e.error))?;

    info!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}

#[derive(serde::Serialize)]
/// CSV export row. Headers written (in this order):
/// `kind,account,category,amount,timestamp`.
struct ExportRow<'a> {
    kind: &'static str,
    account: &'a str,
    category: &'a str,
    amount: String,
    timestamp: String,
}

/// Writes transactions as CSV with a header row.
///
/// Amounts keep their full four fractional digits and timestamps are RFC 3339
/// in UTC, so the export can be loaded by spreadsheet tools without loss.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
pub fn write_transactions_csv<W: Write>(
    writer: W,
    transactions: &[&TransactionRecord],
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for tx in transactions {
        let row = ExportRow {
            kind: tx.tx_type().label(),
            account: tx.account(),
            category: tx.category(),
            amount: tx.amount().to_string_4dp(),
            timestamp: tx.timestamp().to_rfc3339(),
        };
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
