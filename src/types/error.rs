//! Error types for the bank account service
//!
//! This module defines every outcome in which an account operation is refused.
//! None of them is exceptional: each is a normal, expected result that callers
//! receive as the `Err` side of a `Result` instead of a success flag.
//!
//! # Error Categories
//!
//! - **Lifecycle Errors**: no account yet, account already exists, account closed
//! - **Input Errors**: negative initial deposit
//! - **Balance Errors**: overdraft, arithmetic overflow

use thiserror::Error;

/// Main error type for account operations
///
/// Every variant leaves the account untouched: an operation either applies its
/// full effect or none of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Open was attempted with a negative initial deposit
    ///
    /// No account is produced and the slot stays empty.
    #[error("Failed to create account, a negative initial deposit: {amount}")]
    InvalidInput {
        /// The rejected initial amount
        amount: i64,
    },

    /// An operation was attempted before any account was opened
    #[error("Account is not created")]
    NotOpen,

    /// Open was attempted while an account already exists
    ///
    /// A closed account still exists, so it also blocks a second open.
    #[error("Account is created")]
    AlreadyOpen,

    /// Balance, deposit or close was attempted after the account was closed
    #[error("Account is closed")]
    Closed,

    /// A withdrawal would drive the balance below zero
    ///
    /// The balance reported is the value the decision was made against.
    #[error("Not enough money: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance observed when the withdrawal was rejected
        balance: i64,
        /// Requested withdrawal amount (positive)
        requested: i64,
    },

    /// Applying the amount would overflow a 64-bit balance
    #[error("Balance overflow: balance {balance}, amount {amount}")]
    Overflow {
        /// Balance observed when the deposit was rejected
        balance: i64,
        /// The deposit amount
        amount: i64,
    },
}

// Helper functions for creating common errors

impl AccountError {
    /// Create an InvalidInput error
    pub fn invalid_input(amount: i64) -> Self {
        AccountError::InvalidInput { amount }
    }

    /// Create an InsufficientFunds error from the observed balance and the
    /// (negative) deposit amount that was rejected
    pub fn insufficient_funds(balance: i64, amount: i64) -> Self {
        AccountError::InsufficientFunds {
            balance,
            requested: amount.saturating_neg(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(balance: i64, amount: i64) -> Self {
        AccountError::Overflow { balance, amount }
    }
}
