//! Application layer orchestrating ledger operations.
//!
//! This module defines the `TransferCoordinator`, the entry point callers use to
//! create accounts and move funds. It delegates every balance change to the
//! `AccountStore` port and notifies both parties once a transfer has committed.

pub mod coordinator;
