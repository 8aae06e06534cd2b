pub mod reader;
pub mod report;
pub mod writer;
