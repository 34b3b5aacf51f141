//! Request handlers for the `/account` resource
//!
//! Each handler translates one HTTP method into one call on the shared
//! [`AccountSlot`]. Bodies are decoded by hand rather than with the `Json`
//! extractor: account state is checked before the body is read, and a body that
//! fails to decode is reported as a server error with the decoder's message.

use super::response::ApiError;
use crate::core::AccountSlot;
use crate::types::{AccountError, AmountResponse, DepositRequest, OpenRequest};
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// Shared state of every handler
pub type SharedSlot = Arc<AccountSlot>;

type ApiResult = Result<Json<AmountResponse>, ApiError>;

/// `PUT /account` - open the account with `{"initialAmount": N}`
pub async fn open(State(slot): State<SharedSlot>, body: Bytes) -> ApiResult {
    if slot.account().is_some() {
        return Err(AccountError::AlreadyOpen.into());
    }

    let request: OpenRequest = serde_json::from_slice(&body)?;
    let amount = slot.open(request.initial_amount)?;

    Ok(Json(AmountResponse { amount }))
}

/// `GET /account` - read the balance
pub async fn balance(State(slot): State<SharedSlot>) -> ApiResult {
    let amount = slot.balance()?;
    Ok(Json(AmountResponse { amount }))
}

/// `POST /account` - credit or debit with `{"amount": N}`
pub async fn deposit(State(slot): State<SharedSlot>, body: Bytes) -> ApiResult {
    // Not-open and closed take precedence over a malformed body
    slot.balance()?;

    let request: DepositRequest = serde_json::from_slice(&body)?;
    let amount = slot.deposit(request.amount)?;

    Ok(Json(AmountResponse { amount }))
}

/// `DELETE /account` - close the account and return the payout
pub async fn close(State(slot): State<SharedSlot>) -> ApiResult {
    let amount = slot.close()?;
    Ok(Json(AmountResponse { amount }))
}
