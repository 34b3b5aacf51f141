//! Types module
//!
//! Contains the data structures shared between the core and its adapters.
//! This module organizes types into logical submodules:
//! - `api`: JSON request and response bodies
//! - `error`: Error type for account operations

pub mod api;
pub mod error;

pub use api::{AmountResponse, DepositRequest, ErrorResponse, OpenRequest};
pub use error::AccountError;
