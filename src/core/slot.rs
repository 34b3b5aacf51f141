//! Process-scoped holder of the single account
//!
//! The service runs at most one account per process. `AccountSlot` is that piece
//! of state made explicit: it starts empty, is filled once by a successful open,
//! and keeps the account (open or closed) for the rest of the process lifetime.
//! Handlers share one slot through an `Arc`; nothing here is a hidden global.

use super::account::Account;
use crate::types::AccountError;
use std::sync::OnceLock;

/// Slot holding zero or one [`Account`]
///
/// Filling the slot is a one-time publish: of several racing opens, exactly one
/// installs its account and the others observe `AlreadyOpen`. Once filled, every
/// operation is delegated to the lock-free account.
#[derive(Debug, Default)]
pub struct AccountSlot {
    account: OnceLock<Account>,
}

impl AccountSlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self {
            account: OnceLock::new(),
        }
    }

    /// Open the account with an initial deposit
    ///
    /// Returns the opening balance.
    ///
    /// # Errors
    ///
    /// * `AccountError::AlreadyOpen` if an account exists, even a closed one
    /// * `AccountError::InvalidInput` if `initial` is negative; the slot stays
    ///   empty so a later open may still succeed
    pub fn open(&self, initial: i64) -> Result<i64, AccountError> {
        if self.account.get().is_some() {
            return Err(AccountError::AlreadyOpen);
        }

        let account = Account::open(initial)?;
        self.account
            .set(account)
            .map_err(|_| AccountError::AlreadyOpen)?;

        tracing::info!(initial, "account opened");
        Ok(initial)
    }

    /// Read the balance of the account
    ///
    /// # Errors
    ///
    /// * `AccountError::NotOpen` if no account was opened
    /// * `AccountError::Closed` if the account was closed
    pub fn balance(&self) -> Result<i64, AccountError> {
        self.get()?.balance()
    }

    /// Credit or debit the account
    ///
    /// # Errors
    ///
    /// * `AccountError::NotOpen` if no account was opened
    /// * any error of [`Account::deposit`]
    pub fn deposit(&self, amount: i64) -> Result<i64, AccountError> {
        let balance = self.get()?.deposit(amount)?;
        tracing::debug!(amount, balance, "deposit applied");
        Ok(balance)
    }

    /// Close the account, returning the payout
    ///
    /// # Errors
    ///
    /// * `AccountError::NotOpen` if no account was opened
    /// * `AccountError::Closed` if the account was already closed
    pub fn close(&self) -> Result<i64, AccountError> {
        let payout = self.get()?.close()?;
        tracing::info!(payout, "account closed");
        Ok(payout)
    }

    /// Whether the slot holds an account that is still open
    pub fn is_open(&self) -> bool {
        self.account.get().is_some_and(|account| !account.is_closed())
    }

    /// Read-only access to the account, if one was opened
    pub fn account(&self) -> Option<&Account> {
        self.account.get()
    }

    fn get(&self) -> Result<&Account, AccountError> {
        self.account.get().ok_or(AccountError::NotOpen)
    }
}
