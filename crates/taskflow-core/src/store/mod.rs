//! Board Store
//!
//! Owns the one board value for the session. Every mutation builds a new
//! `Board`, swaps it in behind a fresh `Arc` and publishes it to subscribers,
//! so anyone holding an older snapshot keeps a consistent tree.
//!
//! Unknown ids are never an error: the operation is ignored, nothing is
//! published and the method reports `false`/`None`.

mod column_ops;
mod status_policy;
mod task_ops;
mod task_positioning;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::domain::Board;
use crate::ids::IdGenerator;

pub use status_policy::StatusPolicy;

type Listener = Box<dyn Fn(&Arc<Board>) + Send + Sync>;

/// Handle returned by [`BoardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub struct BoardStore {
    board: Arc<Board>,
    version: u64,
    ids: IdGenerator,
    policy: StatusPolicy,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl BoardStore {
    pub fn new(board: Board, policy: StatusPolicy, clock: impl Clock + 'static) -> Self {
        if let Err(e) = board.validate() {
            log::warn!("[STORE] Initial board violates invariants: {}", e);
        }
        let ids = IdGenerator::seeded_from(&board);
        Self {
            board: Arc::new(board),
            version: 0,
            ids,
            policy,
            clock: Box::new(clock),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn with_system_clock(board: Board, policy: StatusPolicy) -> Self {
        Self::new(board, policy, SystemClock)
    }

    /// Current board value
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Shared handle to the current board value
    pub fn snapshot(&self) -> Arc<Board> {
        Arc::clone(&self.board)
    }

    /// Number of board values published so far
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn policy(&self) -> &StatusPolicy {
        &self.policy
    }

    /// Register a listener called with every new board value
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<Board>) + Send + Sync + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// A copy of the current board to build the next value from
    fn draft(&self) -> Board {
        (*self.board).clone()
    }

    /// Swap in `next`, optionally advancing `updated_at`, and publish it
    fn install(&mut self, op: &str, mut next: Board, bump: bool) {
        if bump {
            next.touch(self.clock.now());
        }
        debug_assert!(next.validate().is_ok(), "{} broke board invariants", op);
        self.board = Arc::new(next);
        self.version += 1;
        log::debug!("[STORE] {} applied (version {})", op, self.version);
        for (_, listener) in &self.listeners {
            listener(&self.board);
        }
    }

    fn ignore(op: &str, reason: &str) {
        log::debug!("[STORE] {} ignored: {}", op, reason);
    }
}
