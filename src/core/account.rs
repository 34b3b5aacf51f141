//! Lock-free account state
//!
//! This module provides the `Account` struct, a single balance that can be read,
//! credited, debited and closed from any number of threads at once without a lock.
//!
//! # Design
//!
//! The account is two independent atomics:
//!
//! - `balance`: an `AtomicI64` only ever changed by compare-and-swap (deposits) or
//!   a single swap (close)
//! - `closed`: an `AtomicBool` that goes `false -> true` exactly once
//!
//! Deposits are optimistic: read the balance, decide, then publish the new value
//! only if nobody changed it in between. A failed publish re-runs the whole
//! decision against the fresh value, so an overdraft check is never made against a
//! stale balance.
//!
//! # Closing
//!
//! The two fields cannot be updated together atomically. To keep a deposit that
//! raced a close from landing on the drained balance, the close winner swaps the
//! balance to [`DRAINED`], a value no live balance can take. Any compare-and-swap
//! that expected a live balance (zero included) fails from then on, and the retry
//! sees the account as closed. Every deposit that committed before the swap is
//! part of the payout.

use crate::types::AccountError;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::thread;

/// Balance value held by a closed account
///
/// Live balances are never negative, so this can not collide with one.
const DRAINED: i64 = i64::MIN;

/// A single balance with a one-way open/closed lifecycle
///
/// All methods take `&self` and are safe to call concurrently; share the account
/// through an `Arc` (or a longer-lived owner such as
/// [`AccountSlot`](crate::core::AccountSlot)).
#[derive(Debug)]
pub struct Account {
    /// Current balance, or `DRAINED` once closed
    balance: AtomicI64,

    /// Lifecycle flag: `false` while open, `true` forever after close
    closed: AtomicBool,
}

impl Account {
    /// Open a new account holding `initial`
    ///
    /// # Errors
    ///
    /// * `AccountError::InvalidInput` if `initial` is negative. No account is
    ///   produced.
    pub fn open(initial: i64) -> Result<Self, AccountError> {
        if initial < 0 {
            return Err(AccountError::invalid_input(initial));
        }

        Ok(Account {
            balance: AtomicI64::new(initial),
            closed: AtomicBool::new(false),
        })
    }

    /// Read the current balance
    ///
    /// The value is a snapshot; concurrent deposits may change it immediately
    /// after this returns.
    ///
    /// # Errors
    ///
    /// * `AccountError::Closed` if the account has been closed
    pub fn balance(&self) -> Result<i64, AccountError> {
        if self.is_closed() {
            return Err(AccountError::Closed);
        }

        match self.balance.load(Ordering::Acquire) {
            DRAINED => Err(AccountError::Closed),
            balance => Ok(balance),
        }
    }

    /// Credit (positive `amount`) or debit (negative `amount`) the account
    ///
    /// Returns the balance produced by this deposit. A zero amount succeeds and
    /// returns the unchanged balance.
    ///
    /// Under contention the update is retried, yielding the thread between
    /// attempts. The closed flag and the overdraft check are re-evaluated on every
    /// attempt.
    ///
    /// # Errors
    ///
    /// * `AccountError::Closed` if the account is closed, or closes before the
    ///   update commits
    /// * `AccountError::InsufficientFunds` if the balance would go negative
    /// * `AccountError::Overflow` if the balance would exceed `i64::MAX`
    pub fn deposit(&self, amount: i64) -> Result<i64, AccountError> {
        let mut current = self.balance.load(Ordering::Acquire);

        loop {
            if current == DRAINED || self.is_closed() {
                return Err(AccountError::Closed);
            }

            let updated = current
                .checked_add(amount)
                .ok_or_else(|| AccountError::overflow(current, amount))?;
            if updated < 0 {
                return Err(AccountError::insufficient_funds(current, amount));
            }

            match self.balance.compare_exchange_weak(
                current,
                updated,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return Ok(updated),
                Err(actual) => {
                    tracing::trace!(expected = current, actual, amount, "deposit contended, retrying");
                    current = actual;
                    thread::yield_now();
                }
            }
        }
    }

    /// Close the account and take its balance as the payout
    ///
    /// Exactly one call ever succeeds, however many race. The winner drains the
    /// balance; afterwards `balance`, `deposit` and `close` all fail.
    ///
    /// # Errors
    ///
    /// * `AccountError::Closed` if the account was already closed
    pub fn close(&self) -> Result<i64, AccountError> {
        if self.is_closed()
            || self
                .closed
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
        {
            return Err(AccountError::Closed);
        }

        Ok(self.balance.swap(DRAINED, Ordering::AcqRel))
    }

    /// Whether the account has been closed
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}
