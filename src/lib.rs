//! Personal ledger: named debit/credit accounts, deposits and categorized
//! expenses, and period-filtered reports (full listing, top expenses, top
//! categories) for the console or a file.

pub mod app;
pub mod common;
pub mod demo;
pub mod domain;
pub mod io;
pub mod worker;
