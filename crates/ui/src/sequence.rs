//! Ordering for overlapping comment renders
//!
//! Renders are not cancelled. Each one takes a ticket before its request goes
//! out. A finished render may touch the container only if nothing newer has
//! already been applied, so the list always shows the newest successful fetch.

use std::cell::Cell;

/// Ticket handed to one render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Hands out render tickets and remembers the newest one applied
#[derive(Debug, Default)]
pub struct RenderSequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RenderSequencer {
    pub const fn new() -> Self {
        Self {
            issued: Cell::new(0),
            applied: Cell::new(0),
        }
    }

    /// Start a render
    pub fn begin(&self) -> Ticket {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        Ticket(next)
    }

    /// Claim the container for a finished render.
    ///
    /// Returns false if a render that started later has already been applied.
    pub fn try_apply(&self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied.get() {
            self.applied.set(ticket.0);
            true
        } else {
            false
        }
    }
}
