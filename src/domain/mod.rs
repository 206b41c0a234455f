//! Domain layer: account value types, transfer requests and receipts, and the
//! ports implemented by the infrastructure layer.

pub mod account;
pub mod ports;
pub mod transfer;
