//! Core business logic module
//!
//! This module contains the account state and its process-scoped holder:
//! - `account` - Lock-free balance with a one-way closed flag
//! - `slot` - The single account a process serves

pub mod account;
pub mod slot;

pub use account::Account;
pub use slot::AccountSlot;
