//! CSV adapters used by the batch driver: a command reader for input and an
//! account writer for the final balances.

pub mod account_writer;
pub mod command_reader;
