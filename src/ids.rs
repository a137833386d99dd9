/// Hands out increasing review ids, independent of SQLite's own rowid counter.
///
/// The allocator is seeded once from the highest id in storage. Callers reach it
/// only through the service lock, so `next_id` needs `&mut self` and nothing more.
#[derive(Debug, Default)]
pub struct IdAllocator {
    last: i64,
}

impl IdAllocator {
    /// Seed from the store's current maximum; an empty table starts at zero.
    pub fn seeded(max_id: Option<i64>) -> Self {
        IdAllocator {
            last: max_id.unwrap_or(0),
        }
    }

    /// Advance the counter and return the new value. A consumed id is never handed out again,
    /// even if the insert that used it fails.
    pub fn next_id(&mut self) -> i64 {
        self.last += 1;
        self.last
    }

    pub fn last_id(&self) -> i64 {
        self.last
    }
}
