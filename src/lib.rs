//! Bank Account Service Library
//! # Overview
//!
//! This library provides a single bank account that can be read, credited, debited
//! and closed by any number of threads at once without a mutex, plus a thin HTTP
//! adapter that serves it.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Shared data types (errors, JSON bodies)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::account`] - Lock-free balance with a one-way closed flag
//!   - [`core::slot`] - The single account a process serves
//! - [`http`] - axum router, handlers and server loop
//!
//! # Operations
//!
//! - **Open**: Create the account with a non-negative initial deposit
//! - **Balance**: Read the current balance
//! - **Deposit**: Credit (positive) or debit (negative) the balance; debits may not
//!   overdraw
//! - **Close**: Drain the balance as a payout; exactly one close ever succeeds
//!
//! # Account States
//!
//! An account is either open or closed. A closed account keeps existing but
//! refuses every further operation.

// Module declarations
pub mod cli;
pub mod core;
pub mod http;
pub mod types;

pub use crate::core::{Account, AccountSlot};
pub use types::{AccountError, AmountResponse, DepositRequest, ErrorResponse, OpenRequest};
