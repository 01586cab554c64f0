//! Pre-order visiting counter.

/// Monotonic counter scoped to a single conversion run.
///
/// Each call to [`next_order`](OrderCounter::next_order) hands out the next
/// pre-order index, starting at 1. A fresh counter is allocated for every
/// run and is never shared between runs.
#[derive(Debug, Default)]
pub struct OrderCounter {
    current: u64,
}

impl OrderCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter and return the newly issued order.
    pub fn next_order(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// The last issued order, or 0 when nothing has been issued yet.
    pub fn current(&self) -> u64 {
        self.current
    }
}
