pub mod account;
pub mod deposit;
pub mod report;
pub mod spend;
