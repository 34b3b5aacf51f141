//! Wire types exchanged with HTTP clients
//!
//! Field names follow the JSON contract of the `/account` resource:
//! `initialAmount` when opening, `amount` everywhere else.

use serde::{Deserialize, Serialize};

/// Body of `PUT /account`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRequest {
    /// Initial deposit; must not be negative
    pub initial_amount: i64,
}

/// Body of `POST /account`
///
/// A negative amount is a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub amount: i64,
}

/// Success body shared by every `/account` operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountResponse {
    pub amount: i64,
}

/// Failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
