use std::cell::Cell;

/// Ticket counter for async requests where only the newest one may land.
///
/// `begin` hands out a ticket and makes every earlier ticket stale;
/// `cancel` makes all outstanding tickets stale without issuing a new one.
#[derive(Debug, Default)]
pub(crate) struct LatestRequest {
    seq: Cell<u64>,
}

impl LatestRequest {
    pub const fn new() -> Self {
        Self { seq: Cell::new(0) }
    }

    pub fn begin(&self) -> u64 {
        self.cancel();
        self.seq.get()
    }

    pub fn cancel(&self) {
        self.seq.set(self.seq.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.seq.get() == ticket
    }
}
