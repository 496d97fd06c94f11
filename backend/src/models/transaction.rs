//! Transaction model
//!
//! Represents one synthetic transaction emitted by the traffic generator.
//! Each record has:
//! - A unique id scoped to the slot and batch index it was generated in
//! - A priority fee (lamport-style non-negative integer, scenario-bounded)
//! - A category tag (swap, liquidation, mint, transfer)
//! - A target slot (the generating slot or the next one)
//! - A status (Pending at creation, resolved exactly once to a terminal
//!   status by a lane classifier, never reverted)
//!
//! Records are value types: each lane classifies its own copy of the
//! generated batch, so the two lanes never share a record.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Transaction category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxKind {
    Swap,
    Liquidation,
    Mint,
    Transfer,
}

/// Transaction status
///
/// `Pending` is the only non-terminal state. A classifier moves a record to
/// exactly one of the three terminal states; after that the record is
/// immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    /// Freshly generated, not yet classified
    Pending,

    /// Landed in its target slot
    Confirmed,

    /// Never landed (mempool eviction, spam filtering, fee auction loss)
    Dropped,

    /// Landed but out of submission order (sandwiched / displaced)
    Reordered,
}

impl TxStatus {
    /// Whether this is one of the three terminal outcomes.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TxStatus::Pending)
    }
}

/// Errors from illegal status transitions
#[derive(Debug, Error, PartialEq)]
pub enum TransactionError {
    #[error("transaction {id} already resolved to {status:?}")]
    AlreadyResolved { id: String, status: TxStatus },

    #[error("cannot resolve transaction {id} to the non-terminal Pending status")]
    NonTerminalResolution { id: String },
}

/// One synthetic transaction record
///
/// # Example
/// ```
/// use slotsim_core_rs::{Transaction, TxKind, TxStatus};
///
/// let mut tx = Transaction::new("1000-0-k3x9p".to_string(), 512, TxKind::Swap, 1001);
/// assert!(tx.is_pending());
///
/// tx.resolve(TxStatus::Confirmed).unwrap();
/// assert!(tx.is_confirmed());
///
/// // Terminal status is set exactly once
/// assert!(tx.resolve(TxStatus::Dropped).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, "{slot}-{index}-{suffix}"
    id: String,

    /// Wall-clock creation time in milliseconds since the epoch (display only)
    timestamp_ms: u64,

    /// Priority fee, uniform in [0, scenario base fee)
    priority_fee: u64,

    /// Category tag
    kind: TxKind,

    /// Current status
    status: TxStatus,

    /// Slot the transaction targets (generating slot or the next)
    target_slot: u64,
}

impl Transaction {
    /// Create a new pending transaction.
    pub fn new(id: String, priority_fee: u64, kind: TxKind, target_slot: u64) -> Self {
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        Self {
            id,
            timestamp_ms,
            priority_fee,
            kind,
            status: TxStatus::Pending,
            target_slot,
        }
    }

    /// Get transaction ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get creation timestamp (milliseconds since epoch)
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    /// Get priority fee
    pub fn priority_fee(&self) -> u64 {
        self.priority_fee
    }

    /// Get category tag
    pub fn kind(&self) -> TxKind {
        self.kind
    }

    /// Get current status
    pub fn status(&self) -> TxStatus {
        self.status
    }

    /// Get target slot
    pub fn target_slot(&self) -> u64 {
        self.target_slot
    }

    /// Check if the transaction is still pending
    pub fn is_pending(&self) -> bool {
        matches!(self.status, TxStatus::Pending)
    }

    /// Check if the transaction confirmed
    pub fn is_confirmed(&self) -> bool {
        matches!(self.status, TxStatus::Confirmed)
    }

    /// Check if the transaction was dropped
    pub fn is_dropped(&self) -> bool {
        matches!(self.status, TxStatus::Dropped)
    }

    /// Check if the transaction was reordered
    pub fn is_reordered(&self) -> bool {
        matches!(self.status, TxStatus::Reordered)
    }

    /// Resolve the transaction to a terminal status.
    ///
    /// Allowed exactly once, from `Pending` to one of the three terminal
    /// states. A second resolution (or a resolution back to `Pending`) is an
    /// error and leaves the record untouched.
    pub fn resolve(&mut self, status: TxStatus) -> Result<(), TransactionError> {
        if !status.is_terminal() {
            return Err(TransactionError::NonTerminalResolution {
                id: self.id.clone(),
            });
        }
        if self.status.is_terminal() {
            return Err(TransactionError::AlreadyResolved {
                id: self.id.clone(),
                status: self.status,
            });
        }

        self.status = status;
        Ok(())
    }
}
