pub mod account;
pub mod ledger;
pub mod period;
pub mod transaction;
